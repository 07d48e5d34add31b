use chrono::{DateTime, FixedOffset};
use core_crud::{Resource, TraceCodes};
use sea_orm::Value;
use uuid::Uuid;

use crate::models::{CreateProduct, NewProduct, Product, ProductChanges, UpdateProduct};

/// `products` table; `product_id` defaults to `gen_random_uuid()`.
pub struct Products;

impl Resource for Products {
    type Id = Uuid;
    type Record = Product;
    type Create = CreateProduct;
    type Update = UpdateProduct;
    type New = NewProduct;
    type Changes = ProductChanges;

    const TABLE: &'static str = "products";
    const ID_COLUMN: &'static str = "product_id";
    const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "name",
        "desc",
        "price",
        "discount",
        "stock",
        "category_id",
        "created_at",
        "updated_at",
    ];
    const NAME: &'static str = "product";
    const PLURAL: &'static str = "products";
    const TAG: &'static str = "products";
    const TRACE: TraceCodes = TraceCodes {
        create: "products-001",
        get_one: "products-002",
        get_all: "products-003",
        update: "products-004",
        delete: "products-005",
    };

    fn id(record: &Product) -> Uuid {
        record.product_id
    }

    fn insert_values(new: &NewProduct) -> Vec<(&'static str, Value)> {
        vec![
            ("name", new.name.clone().into()),
            ("desc", new.desc.clone().into()),
            ("price", new.price.into()),
            ("discount", new.discount.into()),
            ("stock", new.stock.into()),
            ("category_id", new.category_id.into()),
        ]
    }

    fn patch_values(changes: &ProductChanges) -> Vec<(&'static str, Value)> {
        let mut values = Vec::new();
        if let Some(name) = &changes.name {
            values.push(("name", name.clone().into()));
        }
        if let Some(desc) = &changes.desc {
            values.push(("desc", desc.clone().into()));
        }
        if let Some(price) = changes.price {
            values.push(("price", price.into()));
        }
        if let Some(discount) = changes.discount {
            values.push(("discount", discount.into()));
        }
        if let Some(stock) = changes.stock {
            values.push(("stock", stock.into()));
        }
        if let Some(category_id) = changes.category_id {
            values.push(("category_id", category_id.into()));
        }
        values
    }

    fn hydrate(id: Uuid, new: NewProduct, at: DateTime<FixedOffset>) -> Product {
        Product {
            product_id: id,
            name: new.name,
            desc: new.desc,
            price: new.price,
            discount: new.discount,
            stock: new.stock,
            category_id: new.category_id,
            created_at: at,
            updated_at: at,
        }
    }

    fn apply(record: &mut Product, changes: ProductChanges, at: DateTime<FixedOffset>) {
        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(desc) = changes.desc {
            record.desc = desc;
        }
        if let Some(price) = changes.price {
            record.price = price;
        }
        if let Some(discount) = changes.discount {
            record.discount = discount;
        }
        if let Some(stock) = changes.stock {
            record.stock = stock;
        }
        if let Some(category_id) = changes.category_id {
            record.category_id = category_id;
        }
        record.updated_at = at;
    }
}
