//! Fixed seed dataset
//!
//! Loaded once on first startup so the shop has something to show. Guarded by
//! "any car already exists", so re-running initialization never duplicates
//! rows.

use sqlx::SqlitePool;
use tracing::info;

use crate::utils::errors::AppError;

// id, license plate, brand, model, year, inspection due
const SEED_CARS: &[(i64, &str, &str, &str, i64, &str)] = &[
    (1, "ABC-123", "Toyota", "Corolla", 2018, "2025-12-15"),
    (2, "XYZ-789", "BMW", "320d", 2020, "2026-03-20"),
    (3, "DEF-456", "Volkswagen", "Golf", 2019, "2025-08-10"),
    (4, "GHI-321", "Audi", "A4", 2021, "2026-05-30"),
    (5, "JKL-654", "Mercedes-Benz", "C-Class", 2022, "2026-11-05"),
];

// id, car id, work hours, hourly rate, date, description
const SEED_SERVICES: &[(i64, i64, f64, f64, &str, &str)] = &[
    (1, 1, 2.0, 15000.0, "2025-09-15", "Olajcsere és szűrőcsere"),
    (2, 1, 4.0, 15000.0, "2025-10-01", "Fékbetét csere"),
    (3, 2, 2.0, 18000.0, "2025-10-05", "Klíma karbantartás"),
    (4, 3, 2.0, 16000.0, "2025-09-20", "Futómű ellenőrzés és beállítás"),
    (5, 4, 4.0, 20000.0, "2025-10-10", "Motor diagnosztika"),
];

// id, service id, part number, name, net price, quantity
const SEED_PARTS: &[(i64, i64, &str, &str, f64, i64)] = &[
    (1, 1, "OIL-001", "Motorolaj 5W-30", 8500.0, 5),
    (2, 1, "FLT-002", "Olajszűrő", 2500.0, 1),
    (3, 2, "BRK-101", "Fékbetét szett elöl", 18000.0, 1),
    (4, 2, "BRK-102", "Féktárcsa pár", 25000.0, 1),
    (5, 3, "AC-301", "Klíma szűrő", 4500.0, 1),
    (6, 3, "AC-302", "Klíma gáz töltés", 12000.0, 1),
    (7, 4, "SUS-201", "Lengéscsillapító pár", 45000.0, 1),
    (8, 5, "ENG-401", "Gyújtógyertya szett", 16000.0, 1),
];

/// Populate the store on first run. Returns whether seeding happened.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, AppError> {
    let car_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
        .fetch_one(pool)
        .await?;

    if car_count > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    for (id, license_plate, brand, model, year, inspection) in SEED_CARS {
        sqlx::query(
            r#"
            INSERT INTO cars (id, license_plate, brand, model, year_of_manufacture, date_of_technical_inspection)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(license_plate)
        .bind(brand)
        .bind(model)
        .bind(year)
        .bind(inspection)
        .execute(&mut *tx)
        .await?;
    }

    for (id, car_id, hours, rate, date, description) in SEED_SERVICES {
        sqlx::query(
            r#"
            INSERT INTO services (id, car_id, work_hours, work_hour_price, service_date, service_description)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(car_id)
        .bind(hours)
        .bind(rate)
        .bind(date)
        .bind(description)
        .execute(&mut *tx)
        .await?;
    }

    for (id, service_id, part_number, name, net_price, quantity) in SEED_PARTS {
        sqlx::query(
            r#"
            INSERT INTO parts (id, service_id, part_number, name, description, quantity, net_price)
            VALUES (?, ?, ?, ?, 'Leírás', ?, ?)
            "#,
        )
        .bind(id)
        .bind(service_id)
        .bind(part_number)
        .bind(name)
        .bind(quantity)
        .bind(net_price)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!(
        "Seed data loaded: {} cars, {} services, {} parts",
        SEED_CARS.len(),
        SEED_SERVICES.len(),
        SEED_PARTS.len()
    );

    Ok(true)
}
