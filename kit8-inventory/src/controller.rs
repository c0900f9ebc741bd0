use rocket::{
    delete,
    get,
    http::Status,
    post,
    put,
    serde::json::{
        self,
        Json,
    },
    State,
};

use kit8_core::{
    auth::CustomerId,
    error::Kit8Error,
    models::*,
    product,
    repository::{
        Record,
        Stores,
    },
    utils,
};

// JSON APIs

/// Return the customer's catalog
#[get("/products")]
pub async fn get_products(
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<Vec<Product>>, Kit8Error> {
    Ok(Json(product::find_all(stores, customer)?))
}

/// Add a product to the catalog
#[post("/products", data = "<req_product>")]
pub async fn create_product(
    customer: CustomerId,
    stores: &State<Stores>,
    req_product: Result<Json<Product>, json::Error<'_>>,
) -> Result<Json<Product>, Kit8Error> {
    let m_product = utils::parse_body(req_product)?;
    Ok(Json(product::create(stores, customer, m_product)?))
}

#[get("/products/<id>")]
pub async fn get_product(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<Product>, Kit8Error> {
    let pid = utils::parse_id(id, Product::ENTITY)?;
    Ok(Json(product::find(stores, customer, pid)?))
}

/// Replace a product, `id` and `customer_id` come from the request
#[put("/products/<id>", data = "<req_product>")]
pub async fn update_product(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
    req_product: Result<Json<Product>, json::Error<'_>>,
) -> Result<Json<Product>, Kit8Error> {
    let pid = utils::parse_id(id, Product::ENTITY)?;
    let m_product = utils::parse_body(req_product)?;
    Ok(Json(product::modify(stores, customer, pid, m_product)?))
}

#[delete("/products/<id>")]
pub async fn delete_product(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Status, Kit8Error> {
    let pid = utils::parse_id(id, Product::ENTITY)?;
    product::delete(stores, customer, pid)?;
    Ok(Status::Ok)
}

/// Stock counts and valuation
#[get("/stats")]
pub async fn get_stats(
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<InventoryStats>, Kit8Error> {
    Ok(Json(product::stats(stores, customer)?))
}
// END JSON APIs

#[cfg(test)]
mod tests {
    use kit8_core::{
        repository::Stores,
        server,
    };
    use rocket::{
        http::{
            Header,
            Status,
        },
        local::blocking::Client,
        serde::json::Value,
    };

    fn client(stores: Stores) -> Client {
        let rocket = server::test_base(stores).mount(crate::BASE, crate::routes());
        Client::tracked(rocket).expect("valid rocket instance")
    }

    fn tenant(id: &str) -> Header<'static> {
        Header::new("X-Customer-Id", String::from(id))
    }

    #[test]
    fn get_product_echoes_id_test() {
        let client = client(Stores::fixture());
        let res = client
            .get("/api/inventory/products/15")
            .header(tenant("3"))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body["id"], 15);
        assert_eq!(body["customer_id"], 3);
        assert_eq!(body["sku"], "EX-001");
    }

    #[test]
    fn list_products_test() {
        let client = client(Stores::fixture());
        let res = client.get("/api/inventory/products").header(tenant("3")).dispatch();
        let body: Value = res.into_json().expect("json body");
        let products = body.as_array().expect("array");
        assert_eq!(products.len(), 3);
        assert_eq!(products[2]["quantity"], 0);
    }

    #[test]
    fn invalid_product_id_test() {
        let client = client(Stores::fixture());
        for res in [
            client.get("/api/inventory/products/abc").header(tenant("3")).dispatch(),
            client.delete("/api/inventory/products/0").header(tenant("3")).dispatch(),
            client
                .put("/api/inventory/products/-2")
                .header(tenant("3"))
                .body("{}")
                .dispatch(),
        ] {
            assert_eq!(res.status(), Status::BadRequest);
            let body: Value = res.into_json().expect("json body");
            assert_eq!(body["error"], "Invalid product ID");
        }
    }

    #[test]
    fn malformed_product_test() {
        let client = client(Stores::fixture());
        for res in [
            client
                .post("/api/inventory/products")
                .header(tenant("3"))
                .body(r#"{"name":"Mouse","price":"cheap"}"#)
                .dispatch(),
            client
                .put("/api/inventory/products/2")
                .header(tenant("3"))
                .body("{not json")
                .dispatch(),
        ] {
            assert_eq!(res.status(), Status::BadRequest);
            let body: Value = res.into_json().expect("json body");
            assert_eq!(body["error"], "Invalid request body");
        }
    }

    #[test]
    fn missing_tenant_test() {
        let client = client(Stores::fixture());
        let res = client.get("/api/inventory/stats").dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
        let res = client
            .get("/api/inventory/stats")
            .header(tenant("not-a-number"))
            .dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
    }

    #[test]
    fn memory_stats_test() {
        let client = client(Stores::memory());
        for body in [
            r#"{"name":"Laptop","price":50000.0,"quantity":10,"sku":"NB-01"}"#,
            r#"{"name":"Mouse","price":1500.0,"quantity":50,"sku":"MS-001"}"#,
            r#"{"name":"Keyboard","price":4500.0,"quantity":0,"sku":"KB-001"}"#,
        ] {
            let res = client
                .post("/api/inventory/products")
                .header(tenant("5"))
                .body(body)
                .dispatch();
            assert_eq!(res.status(), Status::Ok);
        }
        let res = client.get("/api/inventory/stats").header(tenant("5")).dispatch();
        let stats: Value = res.into_json().expect("json body");
        assert_eq!(stats["total_products"], 3);
        assert_eq!(stats["total_value"], 575000.0);
        assert_eq!(stats["low_stock_count"], 1);
        assert_eq!(stats["out_of_stock_count"], 1);
        let res = client.get("/api/inventory/stats").header(tenant("6")).dispatch();
        let other: Value = res.into_json().expect("json body");
        assert_eq!(other["total_products"], 0);
        let res = client
            .get("/api/inventory/products/1")
            .header(tenant("6"))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body["error"], "product not found");
    }
}
