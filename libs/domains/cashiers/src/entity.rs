use chrono::{DateTime, FixedOffset};
use core_crud::{Resource, TraceCodes};
use sea_orm::Value;

use crate::models::{Cashier, CashierChanges, CreateCashier, NewCashier, UpdateCashier};

/// `cashiers` table
pub struct Cashiers;

impl Resource for Cashiers {
    type Id = i32;
    type Record = Cashier;
    type Create = CreateCashier;
    type Update = UpdateCashier;
    type New = NewCashier;
    type Changes = CashierChanges;

    const TABLE: &'static str = "cashiers";
    const ID_COLUMN: &'static str = "cashier_id";
    const COLUMNS: &'static [&'static str] =
        &["cashier_id", "name", "passcode", "created_at", "updated_at"];
    const NAME: &'static str = "cashier";
    const PLURAL: &'static str = "cashiers";
    const TAG: &'static str = "cashiers";
    // List and detail codes are swapped relative to the other resources;
    // clients already match on them.
    const TRACE: TraceCodes = TraceCodes {
        create: "cashier-001",
        get_one: "cashier-003",
        get_all: "cashier-002",
        update: "cashier-004",
        delete: "cashier-005",
    };

    fn id(record: &Cashier) -> i32 {
        record.cashier_id
    }

    fn insert_values(new: &NewCashier) -> Vec<(&'static str, Value)> {
        vec![
            ("name", new.name.clone().into()),
            ("passcode", new.passcode.clone().into()),
        ]
    }

    fn patch_values(changes: &CashierChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(name) = &changes.name {
            values.push(("name", name.clone().into()));
        }
        if let Some(passcode) = &changes.passcode {
            values.push(("passcode", passcode.clone().into()));
        }
        values
    }

    fn hydrate(id: i32, new: NewCashier, at: DateTime<FixedOffset>) -> Cashier {
        Cashier {
            cashier_id: id,
            name: new.name,
            passcode: new.passcode,
            created_at: at,
            updated_at: at,
        }
    }

    fn apply(record: &mut Cashier, changes: CashierChanges, at: DateTime<FixedOffset>) {
        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(passcode) = changes.passcode {
            record.passcode = passcode;
        }
        record.updated_at = at;
    }
}
