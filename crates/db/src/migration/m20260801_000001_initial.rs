//! Initial database migration.
//!
//! Creates the enums, the four user-scoped tables, and the updated_at
//! trigger. User rows live in the external auth system; user_id columns
//! here reference it without a foreign key.

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
        // PART 2: TABLES
        // ============================================================
        db.execute_unprepared(TRANSACTIONS_SQL).await?;
        db.execute_unprepared(INVESTMENTS_SQL).await?;
        db.execute_unprepared(GOALS_SQL).await?;
        db.execute_unprepared(PROGRESS_ENTRIES_SQL).await?;

        // ============================================================
        // PART 3: TRIGGERS & FUNCTIONS
        // ============================================================
        db.execute_unprepared(TRIGGERS_SQL).await?;

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
-- Transaction direction
CREATE TYPE transaction_kind AS ENUM ('expense', 'income');

-- Transaction categories; 'Income' is used by income rows only
CREATE TYPE transaction_category AS ENUM (
    'Makan',
    'Transportasi',
    'Rokok',
    'Belanja',
    'Lainnya',
    'Income'
);

-- Investment asset classes
CREATE TYPE investment_category AS ENUM ('Saham', 'Emas', 'Reksadana');

-- Goal categories
CREATE TYPE goal_category AS ENUM (
    'Pernikahan',
    'Rumah',
    'Kendaraan',
    'Dana Darurat',
    'Liburan',
    'Lainnya'
);

-- Goal priorities
CREATE TYPE goal_priority AS ENUM ('High', 'Medium', 'Low');

-- Goal statuses; stored only in the status_override column
CREATE TYPE goal_status AS ENUM (
    'upcoming',
    'in-progress',
    'completed',
    'overdue'
);
";

const TRANSACTIONS_SQL: &str = r"
CREATE TABLE transactions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    kind transaction_kind NOT NULL,
    amount BIGINT NOT NULL CHECK (amount > 0),
    category transaction_category NOT NULL,
    notes VARCHAR(200) NOT NULL DEFAULT '',
    date DATE NOT NULL,
    timestamp TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    -- Income rows carry the dedicated Income category, expenses never do
    CONSTRAINT chk_transactions_category_kind CHECK (
        (kind = 'income' AND category = 'Income') OR
        (kind = 'expense' AND category <> 'Income')
    )
);

CREATE INDEX idx_transactions_user_date ON transactions(user_id, date);
CREATE INDEX idx_transactions_user_timestamp ON transactions(user_id, timestamp DESC);
";

const INVESTMENTS_SQL: &str = r"
CREATE TABLE investments (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    name VARCHAR(255) NOT NULL,
    category investment_category NOT NULL,
    monthly_contribution BIGINT NOT NULL CHECK (monthly_contribution > 0),
    current_value BIGINT NOT NULL CHECK (current_value > 0),
    purchase_date DATE NOT NULL,
    notes VARCHAR(200) NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_investments_user ON investments(user_id);
";

const GOALS_SQL: &str = r"
CREATE TABLE goals (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    name VARCHAR(100) NOT NULL,
    category goal_category NOT NULL,
    target_amount BIGINT NOT NULL CHECK (target_amount > 0),
    deadline DATE NOT NULL,
    priority goal_priority NOT NULL,
    status_override goal_status,
    funding_notes VARCHAR(500) NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT uq_goals_user_name UNIQUE (user_id, name)
);

CREATE INDEX idx_goals_user_deadline ON goals(user_id, deadline);
";

const PROGRESS_ENTRIES_SQL: &str = r"
CREATE TABLE progress_entries (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    user_id UUID NOT NULL,
    goal_id UUID NOT NULL REFERENCES goals(id) ON DELETE CASCADE,
    month DATE NOT NULL CHECK (EXTRACT(DAY FROM month) = 1),
    planned_amount BIGINT NOT NULL CHECK (planned_amount >= 0),
    actual_amount BIGINT NOT NULL CHECK (actual_amount >= 0),
    notes VARCHAR(200) NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    -- Upsert key: at most one entry per (user, goal, month)
    CONSTRAINT uq_progress_user_goal_month UNIQUE (user_id, goal_id, month)
);

CREATE INDEX idx_progress_user_month ON progress_entries(user_id, month);
";

const TRIGGERS_SQL: &str = r"
-- ============================================================
-- FUNCTION: set_updated_at
-- Keeps updated_at current on every row update
-- ============================================================
CREATE OR REPLACE FUNCTION set_updated_at()
RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

CREATE TRIGGER trg_investments_updated_at
BEFORE UPDATE ON investments
FOR EACH ROW
EXECUTE FUNCTION set_updated_at();

CREATE TRIGGER trg_goals_updated_at
BEFORE UPDATE ON goals
FOR EACH ROW
EXECUTE FUNCTION set_updated_at();

CREATE TRIGGER trg_progress_entries_updated_at
BEFORE UPDATE ON progress_entries
FOR EACH ROW
EXECUTE FUNCTION set_updated_at();
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS progress_entries CASCADE;
DROP TABLE IF EXISTS goals CASCADE;
DROP TABLE IF EXISTS investments CASCADE;
DROP TABLE IF EXISTS transactions CASCADE;

DROP FUNCTION IF EXISTS set_updated_at CASCADE;

DROP TYPE IF EXISTS goal_status;
DROP TYPE IF EXISTS goal_priority;
DROP TYPE IF EXISTS goal_category;
DROP TYPE IF EXISTS investment_category;
DROP TYPE IF EXISTS transaction_category;
DROP TYPE IF EXISTS transaction_kind;
";
