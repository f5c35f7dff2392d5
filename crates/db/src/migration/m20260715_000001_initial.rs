//! Initial database migration.
//!
//! Creates the enum types, the nine business tables, and their indexes.
//! Every object lives in the `public` schema and is addressed with an
//! explicit qualifier so queries and migrations agree on one reference.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: ENUMS
        // ============================================================
        db.execute_unprepared(ENUMS_SQL).await?;

        // ============================================================
        // PART 2: REFERENCE TABLES
        // ============================================================
        db.execute_unprepared(COMPANIES_SQL).await?;
        db.execute_unprepared(CONTRACTORS_SQL).await?;
        db.execute_unprepared(ITEMS_SQL).await?;

        // ============================================================
        // PART 3: ESTIMATES & PROJECTS
        // ============================================================
        db.execute_unprepared(ESTIMATES_SQL).await?;
        db.execute_unprepared(PROJECTS_SQL).await?;

        // ============================================================
        // PART 4: PAYMENTS & LINE ITEMS
        // ============================================================
        db.execute_unprepared(PAYMENTS_SQL).await?;
        db.execute_unprepared(PROJECT_ITEMS_SQL).await?;
        db.execute_unprepared(ESTIMATE_ITEMS_SQL).await?;
        db.execute_unprepared(PROJECT_CONTRACTORS_SQL).await?;

        // ============================================================
        // PART 5: INDEXES
        // ============================================================
        db.execute_unprepared(INDEXES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const ENUMS_SQL: &str = r"
-- Project lifecycle
CREATE TYPE public.project_status AS ENUM (
    'planning',
    'in_progress',
    'completed',
    'cancelled'
);

-- Estimate review lifecycle
CREATE TYPE public.estimate_status AS ENUM (
    'draft',
    'in_review',
    'approved',
    'rejected'
);

-- Payment settlement lifecycle
CREATE TYPE public.payment_status AS ENUM (
    'pending',
    'completed',
    'cancelled'
);

-- Payment direction
CREATE TYPE public.payment_type AS ENUM ('income', 'expense');

-- Catalog item kind
CREATE TYPE public.item_type AS ENUM ('material', 'service');
";

const COMPANIES_SQL: &str = r"
CREATE TABLE public.companies (
    id                     SERIAL PRIMARY KEY,
    name                   VARCHAR(255) NOT NULL,
    inn                    VARCHAR(12) NOT NULL,
    kpp                    VARCHAR(9) NOT NULL DEFAULT '',
    ogrn                   VARCHAR(15) NOT NULL DEFAULT '',
    legal_address          TEXT NOT NULL DEFAULT '',
    actual_address         TEXT NOT NULL DEFAULT '',
    bank_name              VARCHAR(255) NOT NULL DEFAULT '',
    bik                    VARCHAR(9) NOT NULL DEFAULT '',
    correspondent_account  VARCHAR(20) NOT NULL DEFAULT '',
    account_number         VARCHAR(20) NOT NULL DEFAULT '',
    contact_person         VARCHAR(255) NOT NULL DEFAULT '',
    email                  VARCHAR(255) NOT NULL DEFAULT '',
    phone                  VARCHAR(50) NOT NULL DEFAULT '',
    created_at             TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const CONTRACTORS_SQL: &str = r"
CREATE TABLE public.contractors (
    id              SERIAL PRIMARY KEY,
    name            VARCHAR(255) NOT NULL,
    specialization  VARCHAR(255) NOT NULL,
    email           VARCHAR(255) NOT NULL,
    phone           VARCHAR(50) NOT NULL DEFAULT '',
    hourly_rate     NUMERIC(12, 2) NOT NULL DEFAULT 0,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const ITEMS_SQL: &str = r"
CREATE TABLE public.items (
    id             SERIAL PRIMARY KEY,
    name           VARCHAR(255) NOT NULL,
    description    TEXT NOT NULL DEFAULT '',
    type           public.item_type NOT NULL,
    unit           VARCHAR(50) NOT NULL,
    default_price  NUMERIC(12, 2),
    created_at     TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const ESTIMATES_SQL: &str = r"
CREATE TABLE public.estimates (
    id               SERIAL PRIMARY KEY,
    company_id       INTEGER NOT NULL REFERENCES public.companies (id),
    title            VARCHAR(255) NOT NULL,
    description      TEXT NOT NULL DEFAULT '',
    estimated_cost   NUMERIC(14, 2),
    estimated_hours  NUMERIC(10, 2) NOT NULL DEFAULT 0,
    status           public.estimate_status NOT NULL DEFAULT 'draft',
    created_at       TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const PROJECTS_SQL: &str = r"
CREATE TABLE public.projects (
    id           SERIAL PRIMARY KEY,
    company_id   INTEGER NOT NULL REFERENCES public.companies (id),
    estimate_id  INTEGER REFERENCES public.estimates (id),
    title        VARCHAR(255) NOT NULL,
    description  TEXT NOT NULL DEFAULT '',
    budget       NUMERIC(14, 2) NOT NULL DEFAULT 0,
    actual_cost  NUMERIC(14, 2) NOT NULL DEFAULT 0,
    status       public.project_status NOT NULL DEFAULT 'planning',
    start_date   DATE,
    end_date     DATE,
    created_at   TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const PAYMENTS_SQL: &str = r"
CREATE TABLE public.payments (
    id             SERIAL PRIMARY KEY,
    project_id     INTEGER NOT NULL REFERENCES public.projects (id),
    contractor_id  INTEGER REFERENCES public.contractors (id),
    type           public.payment_type NOT NULL,
    amount         NUMERIC(14, 2) NOT NULL,
    description    TEXT NOT NULL DEFAULT '',
    payment_date   DATE NOT NULL,
    status         public.payment_status NOT NULL DEFAULT 'pending',
    created_at     TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const PROJECT_ITEMS_SQL: &str = r"
CREATE TABLE public.project_items (
    id          SERIAL PRIMARY KEY,
    project_id  INTEGER NOT NULL REFERENCES public.projects (id) ON DELETE CASCADE,
    item_id     INTEGER NOT NULL REFERENCES public.items (id),
    quantity    NUMERIC(12, 3) NOT NULL,
    unit_price  NUMERIC(12, 2) NOT NULL
);
";

const ESTIMATE_ITEMS_SQL: &str = r"
CREATE TABLE public.estimate_items (
    id           SERIAL PRIMARY KEY,
    estimate_id  INTEGER NOT NULL REFERENCES public.estimates (id) ON DELETE CASCADE,
    item_id      INTEGER NOT NULL REFERENCES public.items (id),
    quantity     NUMERIC(12, 3) NOT NULL,
    unit_price   NUMERIC(12, 2) NOT NULL
);
";

const PROJECT_CONTRACTORS_SQL: &str = r"
CREATE TABLE public.project_contractors (
    id             SERIAL PRIMARY KEY,
    project_id     INTEGER NOT NULL REFERENCES public.projects (id) ON DELETE CASCADE,
    contractor_id  INTEGER NOT NULL REFERENCES public.contractors (id),
    role           VARCHAR(255) NOT NULL,
    hourly_rate    NUMERIC(12, 2) NOT NULL
);
";

const INDEXES_SQL: &str = r"
CREATE INDEX idx_estimates_company ON public.estimates (company_id);
CREATE INDEX idx_estimates_created ON public.estimates (created_at DESC);
CREATE INDEX idx_projects_company ON public.projects (company_id);
CREATE INDEX idx_projects_estimate ON public.projects (estimate_id);
CREATE INDEX idx_projects_created ON public.projects (created_at DESC);
CREATE INDEX idx_payments_project ON public.payments (project_id);
CREATE INDEX idx_payments_contractor ON public.payments (contractor_id);
CREATE INDEX idx_payments_date ON public.payments (payment_date);
CREATE INDEX idx_project_items_project ON public.project_items (project_id);
CREATE INDEX idx_estimate_items_estimate ON public.estimate_items (estimate_id);
CREATE INDEX idx_project_contractors_project ON public.project_contractors (project_id);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS public.project_contractors;
DROP TABLE IF EXISTS public.estimate_items;
DROP TABLE IF EXISTS public.project_items;
DROP TABLE IF EXISTS public.payments;
DROP TABLE IF EXISTS public.projects;
DROP TABLE IF EXISTS public.estimates;
DROP TABLE IF EXISTS public.items;
DROP TABLE IF EXISTS public.contractors;
DROP TABLE IF EXISTS public.companies;
DROP TYPE IF EXISTS public.item_type;
DROP TYPE IF EXISTS public.payment_type;
DROP TYPE IF EXISTS public.payment_status;
DROP TYPE IF EXISTS public.estimate_status;
DROP TYPE IF EXISTS public.project_status;
";
