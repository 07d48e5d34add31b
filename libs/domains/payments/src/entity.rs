use chrono::{DateTime, FixedOffset};
use core_crud::{Resource, TraceCodes};
use sea_orm::Value;

use crate::models::{CreatePayment, NewPayment, Payment, PaymentChanges, UpdatePayment};

/// `payments` table
pub struct Payments;

impl Resource for Payments {
    type Id = i32;
    type Record = Payment;
    type Create = CreatePayment;
    type Update = UpdatePayment;
    type New = NewPayment;
    type Changes = PaymentChanges;

    const TABLE: &'static str = "payments";
    const ID_COLUMN: &'static str = "payment_id";
    const COLUMNS: &'static [&'static str] = &[
        "payment_id",
        "name",
        "type",
        "payment_type_id",
        "logo",
        "created_at",
        "updated_at",
    ];
    const NAME: &'static str = "payment";
    const PLURAL: &'static str = "payments";
    const TAG: &'static str = "payments";
    const TRACE: TraceCodes = TraceCodes {
        create: "payment-001",
        get_one: "payment-003",
        get_all: "payment-002",
        update: "payment-004",
        delete: "payment-005",
    };

    fn id(record: &Payment) -> i32 {
        record.payment_id
    }

    fn insert_values(new: &NewPayment) -> Vec<(&'static str, Value)> {
        vec![
            ("name", new.name.clone().into()),
            ("type", new.kind.clone().into()),
            ("payment_type_id", new.payment_type_id.into()),
            ("logo", new.logo.clone().into()),
        ]
    }

    fn patch_values(changes: &PaymentChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(name) = &changes.name {
            values.push(("name", name.clone().into()));
        }
        if let Some((kind, payment_type_id)) = &changes.kind {
            values.push(("type", kind.clone().into()));
            values.push(("payment_type_id", (*payment_type_id).into()));
        }
        if let Some(logo) = &changes.logo {
            values.push(("logo", logo.clone().into()));
        }
        values
    }

    fn hydrate(id: i32, new: NewPayment, at: DateTime<FixedOffset>) -> Payment {
        Payment {
            payment_id: id,
            name: new.name,
            kind: new.kind,
            payment_type_id: new.payment_type_id,
            logo: new.logo,
            created_at: at,
            updated_at: at,
        }
    }

    fn apply(record: &mut Payment, changes: PaymentChanges, at: DateTime<FixedOffset>) {
        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some((kind, payment_type_id)) = changes.kind {
            record.kind = kind;
            record.payment_type_id = payment_type_id;
        }
        if let Some(logo) = changes.logo {
            record.logo = logo;
        }
        record.updated_at = at;
    }
}
