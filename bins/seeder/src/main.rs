//! Database seeder for Arta development and testing.
//!
//! Seeds one test user's transactions, investments, savings goals, and
//! monthly progress entries for local development.
//!
//! Usage: cargo run --bin seeder

use chrono::{Datelike, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use arta_db::entities::{
    goals, investments, progress_entries,
    sea_orm_active_enums::{
        GoalCategory, GoalPriority, InvestmentCategory, TransactionCategory, TransactionKind,
    },
    transactions,
};

/// Test user ID (consistent for all seeds).
const TEST_USER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Emergency fund goal ID (consistent for all seeds).
const GOAL_DANA_DARURAT_ID: &str = "00000000-0000-0000-0000-000000000011";
/// House down payment goal ID (consistent for all seeds).
const GOAL_DP_RUMAH_ID: &str = "00000000-0000-0000-0000-000000000012";
/// Vacation goal ID (consistent for all seeds).
const GOAL_LIBURAN_ID: &str = "00000000-0000-0000-0000-000000000013";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = arta_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding transactions...");
    seed_transactions(&db).await;

    println!("Seeding investments...");
    seed_investments(&db).await;

    println!("Seeding goals...");
    seed_goals(&db).await;

    println!("Seeding goal progress...");
    seed_progress(&db).await;

    println!("Seeding complete!");
}

fn test_user_id() -> Uuid {
    Uuid::parse_str(TEST_USER_ID).unwrap()
}

/// The first day of the month `back` months before `today`.
fn month_start(today: NaiveDate, back: u32) -> NaiveDate {
    let mut year = today.year();
    let mut month = i64::from(today.month()) - i64::from(back);
    while month < 1 {
        month += 12;
        year -= 1;
    }
    NaiveDate::from_ymd_opt(year, u32::try_from(month).unwrap(), 1).unwrap()
}

/// Seeds three months of expenses and salary income for the test user.
async fn seed_transactions(db: &DatabaseConnection) {
    let user_id = test_user_id();

    // Transactions have no natural key, so re-running would duplicate
    // them; skip if the user already has any.
    let existing = transactions::Entity::find()
        .filter(transactions::Column::UserId.eq(user_id))
        .one(db)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        println!("  Transactions already exist, skipping...");
        return;
    }

    let today = Utc::now().date_naive();
    let mut inserted = 0;

    for months_back in 0..3u32 {
        let start = month_start(today, months_back);

        let rows: [(TransactionKind, TransactionCategory, i64, i64, &str); 6] = [
            (TransactionKind::Income, TransactionCategory::Income, 12_500_000, 0, "Gaji bulanan"),
            (TransactionKind::Expense, TransactionCategory::Makan, 45_000, 2, "Nasi padang"),
            (TransactionKind::Expense, TransactionCategory::Transportasi, 150_000, 4, "Bensin"),
            (TransactionKind::Expense, TransactionCategory::Belanja, 850_000, 9, "Belanja bulanan"),
            (TransactionKind::Expense, TransactionCategory::Makan, 120_000, 15, "Makan keluarga"),
            (TransactionKind::Expense, TransactionCategory::Lainnya, 200_000, 20, "Pulsa dan internet"),
        ];

        for (kind, category, amount, day_offset, notes) in rows {
            let date = start + Duration::days(day_offset);
            let timestamp = date.and_hms_opt(12, 0, 0).unwrap().and_utc();

            let tx = transactions::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(user_id),
                kind: Set(kind),
                amount: Set(amount),
                category: Set(category),
                notes: Set(notes.to_string()),
                date: Set(date),
                timestamp: Set(timestamp.into()),
                created_at: Set(Utc::now().into()),
            };

            if let Err(e) = tx.insert(db).await {
                eprintln!("Failed to insert transaction: {e}");
            } else {
                inserted += 1;
            }
        }
    }

    println!("  Inserted {inserted} transactions (3 months)");
}

/// Seeds sample investment holdings.
async fn seed_investments(db: &DatabaseConnection) {
    let user_id = test_user_id();

    let existing = investments::Entity::find()
        .filter(investments::Column::UserId.eq(user_id))
        .one(db)
        .await
        .ok()
        .flatten();
    if existing.is_some() {
        println!("  Investments already exist, skipping...");
        return;
    }

    let today = Utc::now().date_naive();

    let holdings: [(&str, InvestmentCategory, i64, i64, u32); 3] = [
        ("Saham BBCA", InvestmentCategory::Saham, 1_000_000, 6_800_000, 6),
        ("Emas Antam", InvestmentCategory::Emas, 500_000, 4_250_000, 8),
        ("Reksadana Pasar Uang", InvestmentCategory::Reksadana, 750_000, 3_050_000, 4),
    ];

    let mut inserted = 0;
    for (name, category, contribution, value, months_held) in holdings {
        let investment = investments::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            name: Set(name.to_string()),
            category: Set(category),
            monthly_contribution: Set(contribution),
            current_value: Set(value),
            purchase_date: Set(month_start(today, months_held)),
            notes: Set(String::new()),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = investment.insert(db).await {
            eprintln!("Failed to insert investment {name}: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} investments");
}

/// Seeds three savings goals with fixed IDs.
async fn seed_goals(db: &DatabaseConnection) {
    let user_id = test_user_id();
    let today = Utc::now().date_naive();

    let goal_rows: [(&str, &str, GoalCategory, i64, i64, GoalPriority, &str); 3] = [
        (
            GOAL_DANA_DARURAT_ID,
            "Dana Darurat",
            GoalCategory::DanaDarurat,
            75_000_000,
            300,
            GoalPriority::High,
            "6x pengeluaran bulanan, transfer otomatis tiap gajian",
        ),
        (
            GOAL_DP_RUMAH_ID,
            "DP Rumah",
            GoalCategory::Rumah,
            250_000_000,
            900,
            GoalPriority::Medium,
            "Target DP 20% rumah di Depok",
        ),
        (
            GOAL_LIBURAN_ID,
            "Liburan Bali",
            GoalCategory::Liburan,
            15_000_000,
            150,
            GoalPriority::Low,
            "",
        ),
    ];

    let mut inserted = 0;
    for (id, name, category, target, deadline_days, priority, notes) in goal_rows {
        let goal_id = Uuid::parse_str(id).unwrap();

        if goals::Entity::find_by_id(goal_id)
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some()
        {
            println!("  Goal {name} already exists, skipping...");
            continue;
        }

        let goal = goals::ActiveModel {
            id: Set(goal_id),
            user_id: Set(user_id),
            name: Set(name.to_string()),
            category: Set(category),
            target_amount: Set(target),
            deadline: Set(today + Duration::days(deadline_days)),
            priority: Set(priority),
            status_override: Set(None),
            funding_notes: Set(notes.to_string()),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = goal.insert(db).await {
            eprintln!("Failed to insert goal {name}: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} goals");
}

/// Seeds recent monthly progress for the seeded goals.
async fn seed_progress(db: &DatabaseConnection) {
    let user_id = test_user_id();
    let today = Utc::now().date_naive();

    // (goal, months back, planned, actual)
    let entries: [(&str, u32, i64, i64); 6] = [
        (GOAL_DANA_DARURAT_ID, 2, 3_000_000, 3_000_000),
        (GOAL_DANA_DARURAT_ID, 1, 3_000_000, 2_500_000),
        (GOAL_DANA_DARURAT_ID, 0, 3_000_000, 0),
        (GOAL_DP_RUMAH_ID, 2, 5_000_000, 4_000_000),
        (GOAL_DP_RUMAH_ID, 1, 5_000_000, 5_000_000),
        (GOAL_LIBURAN_ID, 1, 1_500_000, 1_500_000),
    ];

    let mut inserted = 0;
    for (goal_id, months_back, planned, actual) in entries {
        let entry = progress_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            goal_id: Set(Uuid::parse_str(goal_id).unwrap()),
            month: Set(month_start(today, months_back)),
            planned_amount: Set(planned),
            actual_amount: Set(actual),
            notes: Set(String::new()),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        };

        if let Err(e) = entry.insert(db).await {
            // Ignore duplicate key errors (month already seeded)
            if !e.to_string().contains("duplicate key") {
                eprintln!("Failed to insert progress entry: {e}");
            }
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} progress entries");
}
