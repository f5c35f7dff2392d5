//! Database seeder for Podryad development and testing.
//!
//! Seeds demo companies, contractors, catalog items, an estimate, a
//! project with line rows, and payments spread over recent months so the
//! dashboard has something to show.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, Months, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use podryad_db::entities::{
    companies, contractors, estimates, items, payments, project_contractors, project_items,
    projects,
    sea_orm_active_enums::{
        EstimateStatus, ItemType, PaymentStatus, PaymentType, ProjectStatus,
    },
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = podryad_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let existing = companies::Entity::find()
        .count(&db)
        .await
        .expect("Failed to count companies");
    if existing > 0 {
        println!("Database already contains companies, skipping seed.");
        return;
    }

    println!("Seeding companies...");
    let company_ids = seed_companies(&db).await;

    println!("Seeding contractors...");
    let contractor_ids = seed_contractors(&db).await;

    println!("Seeding catalog items...");
    let item_ids = seed_items(&db).await;

    println!("Seeding estimate...");
    let estimate_id = seed_estimate(&db, company_ids[0]).await;

    println!("Seeding projects...");
    let project_id = seed_projects(
        &db,
        &company_ids,
        estimate_id,
        &item_ids,
        &contractor_ids,
    )
    .await;

    println!("Seeding payments...");
    seed_payments(&db, project_id, contractor_ids[0]).await;

    println!("Seeding complete!");
}

async fn seed_companies(db: &DatabaseConnection) -> Vec<i32> {
    let rows = [
        (
            "ТехноСтрой",
            "7701234567",
            "Петров И.И.",
            "info@tehnostroy.ru",
            "+7 495 123-45-67",
        ),
        (
            "ИнноТех",
            "7709876543",
            "Смирнова А.А.",
            "contact@innotech.ru",
            "+7 495 987-65-43",
        ),
        (
            "СтройПроект",
            "7705556677",
            "Иванов В.В.",
            "office@stroyproject.ru",
            "+7 495 555-66-77",
        ),
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for (name, inn, contact, email, phone) in rows {
        let company = companies::ActiveModel {
            name: Set(name.to_string()),
            inn: Set(inn.to_string()),
            kpp: Set(String::new()),
            ogrn: Set(String::new()),
            legal_address: Set(String::new()),
            actual_address: Set(String::new()),
            bank_name: Set(String::new()),
            bik: Set(String::new()),
            correspondent_account: Set(String::new()),
            account_number: Set(String::new()),
            contact_person: Set(contact.to_string()),
            email: Set(email.to_string()),
            phone: Set(phone.to_string()),
            ..Default::default()
        };
        let company = company.insert(db).await.expect("Failed to seed company");
        ids.push(company.id);
    }
    ids
}

async fn seed_contractors(db: &DatabaseConnection) -> Vec<i32> {
    let rows = [
        ("Алексей Кузнецов", "Электрика", "kuznetsov@example.ru", 1800),
        ("Мария Соколова", "Дизайн интерьера", "sokolova@example.ru", 2500),
        ("Дмитрий Орлов", "Сантехника", "orlov@example.ru", 1500),
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for (name, specialization, email, rate) in rows {
        let contractor = contractors::ActiveModel {
            name: Set(name.to_string()),
            specialization: Set(specialization.to_string()),
            email: Set(email.to_string()),
            phone: Set(String::new()),
            hourly_rate: Set(Decimal::from(rate)),
            ..Default::default()
        };
        let contractor = contractor
            .insert(db)
            .await
            .expect("Failed to seed contractor");
        ids.push(contractor.id);
    }
    ids
}

async fn seed_items(db: &DatabaseConnection) -> Vec<i32> {
    let rows = [
        ("Кабель ВВГ 3x2.5", ItemType::Material, "м", Some(85)),
        ("Гипсокартон 12.5мм", ItemType::Material, "лист", Some(450)),
        ("Монтаж электропроводки", ItemType::Service, "точка", Some(650)),
        ("Проектирование", ItemType::Service, "час", None),
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for (name, item_type, unit, price) in rows {
        let item = items::ActiveModel {
            name: Set(name.to_string()),
            description: Set(String::new()),
            item_type: Set(item_type),
            unit: Set(unit.to_string()),
            default_price: Set(price.map(Decimal::from)),
            ..Default::default()
        };
        let item = item.insert(db).await.expect("Failed to seed item");
        ids.push(item.id);
    }
    ids
}

async fn seed_estimate(db: &DatabaseConnection, company_id: i32) -> i32 {
    let estimate = estimates::ActiveModel {
        company_id: Set(company_id),
        title: Set("Ремонт офиса, 2-й этаж".to_string()),
        description: Set("Полный цикл: электрика, отделка".to_string()),
        estimated_cost: Set(Some(Decimal::from(1_250_000))),
        estimated_hours: Set(Decimal::from(320)),
        status: Set(EstimateStatus::Approved),
        ..Default::default()
    };

    estimate
        .insert(db)
        .await
        .expect("Failed to seed estimate")
        .id
}

async fn seed_projects(
    db: &DatabaseConnection,
    company_ids: &[i32],
    estimate_id: i32,
    item_ids: &[i32],
    contractor_ids: &[i32],
) -> i32 {
    let today = Utc::now().date_naive();

    let converted = projects::ActiveModel {
        company_id: Set(company_ids[0]),
        estimate_id: Set(Some(estimate_id)),
        title: Set("Ремонт офиса, 2-й этаж".to_string()),
        description: Set("Конвертирован из утвержденной сметы".to_string()),
        budget: Set(Decimal::from(1_250_000)),
        actual_cost: Set(Decimal::from(480_000)),
        status: Set(ProjectStatus::InProgress),
        start_date: Set(today.checked_sub_months(Months::new(3)).map(|d| d.with_day(1).unwrap_or(d))),
        ..Default::default()
    };
    let converted = converted.insert(db).await.expect("Failed to seed project");

    let line = project_items::ActiveModel {
        project_id: Set(converted.id),
        item_id: Set(item_ids[0]),
        quantity: Set(Decimal::from(400)),
        unit_price: Set(Decimal::from(85)),
        ..Default::default()
    };
    line.insert(db).await.expect("Failed to seed project item");

    let line = project_contractors::ActiveModel {
        project_id: Set(converted.id),
        contractor_id: Set(contractor_ids[0]),
        role: Set("Электромонтаж".to_string()),
        hourly_rate: Set(Decimal::from(1800)),
        ..Default::default()
    };
    line.insert(db)
        .await
        .expect("Failed to seed project contractor");

    let planned = projects::ActiveModel {
        company_id: Set(company_ids[1]),
        title: Set("Отделка шоурума".to_string()),
        description: Set(String::new()),
        budget: Set(Decimal::from(600_000)),
        actual_cost: Set(Decimal::from(0)),
        status: Set(ProjectStatus::Planning),
        ..Default::default()
    };
    planned.insert(db).await.expect("Failed to seed project");

    converted.id
}

async fn seed_payments(db: &DatabaseConnection, project_id: i32, contractor_id: i32) {
    let today = Utc::now().date_naive();

    // One income and one contractor expense per month over the last
    // three months, plus a pending expense this month.
    for months_back in 1..=3 {
        let date = today
            .checked_sub_months(Months::new(months_back))
            .unwrap_or(today);

        let income = payments::ActiveModel {
            project_id: Set(project_id),
            contractor_id: Set(None),
            payment_type: Set(PaymentType::Income),
            amount: Set(Decimal::from(150_000)),
            description: Set("Оплата по договору".to_string()),
            payment_date: Set(date),
            status: Set(PaymentStatus::Completed),
            ..Default::default()
        };
        income.insert(db).await.expect("Failed to seed payment");

        let expense = payments::ActiveModel {
            project_id: Set(project_id),
            contractor_id: Set(Some(contractor_id)),
            payment_type: Set(PaymentType::Expense),
            amount: Set(Decimal::from(54_000)),
            description: Set("Работы по электрике".to_string()),
            payment_date: Set(date),
            status: Set(PaymentStatus::Completed),
            ..Default::default()
        };
        expense.insert(db).await.expect("Failed to seed payment");
    }

    let pending = payments::ActiveModel {
        project_id: Set(project_id),
        contractor_id: Set(Some(contractor_id)),
        payment_type: Set(PaymentType::Expense),
        amount: Set(Decimal::from(36_000)),
        description: Set("Текущий этап".to_string()),
        payment_date: Set(today),
        status: Set(PaymentStatus::Pending),
        ..Default::default()
    };
    pending.insert(db).await.expect("Failed to seed payment");
}
