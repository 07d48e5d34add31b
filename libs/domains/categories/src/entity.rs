use chrono::{DateTime, FixedOffset};
use core_crud::{Resource, TraceCodes};
use sea_orm::Value;

use crate::models::{Category, CategoryChanges, CreateCategory, NewCategory, UpdateCategory};

/// `categories` table
pub struct Categories;

impl Resource for Categories {
    type Id = i32;
    type Record = Category;
    type Create = CreateCategory;
    type Update = UpdateCategory;
    type New = NewCategory;
    type Changes = CategoryChanges;

    const TABLE: &'static str = "categories";
    const ID_COLUMN: &'static str = "category_id";
    const COLUMNS: &'static [&'static str] =
        &["category_id", "title", "desc", "created_at", "updated_at"];
    const NAME: &'static str = "category";
    const PLURAL: &'static str = "categories";
    const TAG: &'static str = "categories";
    const TRACE: TraceCodes = TraceCodes {
        create: "category-001",
        get_one: "category-002",
        get_all: "category-003",
        update: "category-004",
        delete: "category-005",
    };

    fn id(record: &Category) -> i32 {
        record.category_id
    }

    fn insert_values(new: &NewCategory) -> Vec<(&'static str, Value)> {
        vec![
            ("title", new.title.clone().into()),
            ("desc", new.desc.clone().into()),
        ]
    }

    fn patch_values(changes: &CategoryChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(title) = &changes.title {
            values.push(("title", title.clone().into()));
        }
        if let Some(desc) = &changes.desc {
            values.push(("desc", desc.clone().into()));
        }
        values
    }

    fn hydrate(id: i32, new: NewCategory, at: DateTime<FixedOffset>) -> Category {
        Category {
            category_id: id,
            title: new.title,
            desc: new.desc,
            created_at: at,
            updated_at: at,
        }
    }

    fn apply(record: &mut Category, changes: CategoryChanges, at: DateTime<FixedOffset>) {
        if let Some(title) = changes.title {
            record.title = title;
        }
        if let Some(desc) = changes.desc {
            record.desc = desc;
        }
        record.updated_at = at;
    }
}
