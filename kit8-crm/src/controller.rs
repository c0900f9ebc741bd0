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
    contact,
    deal,
    error::Kit8Error,
    models::*,
    repository::{
        Record,
        Stores,
    },
    utils,
};

// JSON APIs

/// Return all contacts of the customer
#[get("/contacts")]
pub async fn get_contacts(
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<Vec<Contact>>, Kit8Error> {
    Ok(Json(contact::find_all(stores, customer)?))
}

/// Add contact
#[post("/contacts", data = "<req_contact>")]
pub async fn create_contact(
    customer: CustomerId,
    stores: &State<Stores>,
    req_contact: Result<Json<Contact>, json::Error<'_>>,
) -> Result<Json<Contact>, Kit8Error> {
    let m_contact = utils::parse_body(req_contact)?;
    Ok(Json(contact::create(stores, customer, m_contact)?))
}

#[put("/contacts/<id>", data = "<req_contact>")]
pub async fn update_contact(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
    req_contact: Result<Json<Contact>, json::Error<'_>>,
) -> Result<Json<Contact>, Kit8Error> {
    let cid = utils::parse_id(id, Contact::ENTITY)?;
    let m_contact = utils::parse_body(req_contact)?;
    Ok(Json(contact::modify(stores, customer, cid, m_contact)?))
}

/// Delete a contact, empty body on success
#[delete("/contacts/<id>")]
pub async fn delete_contact(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Status, Kit8Error> {
    let cid = utils::parse_id(id, Contact::ENTITY)?;
    contact::delete(stores, customer, cid)?;
    Ok(Status::Ok)
}

#[get("/deals")]
pub async fn get_deals(
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<Vec<Deal>>, Kit8Error> {
    Ok(Json(deal::find_all(stores, customer)?))
}

/// Create a deal, it always starts at stage `new`
#[post("/deals", data = "<req_deal>")]
pub async fn create_deal(
    customer: CustomerId,
    stores: &State<Stores>,
    req_deal: Result<Json<Deal>, json::Error<'_>>,
) -> Result<Json<Deal>, Kit8Error> {
    let m_deal = utils::parse_body(req_deal)?;
    Ok(Json(deal::create(stores, customer, m_deal)?))
}

#[put("/deals/<id>", data = "<req_deal>")]
pub async fn update_deal(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
    req_deal: Result<Json<Deal>, json::Error<'_>>,
) -> Result<Json<Deal>, Kit8Error> {
    let did = utils::parse_id(id, Deal::ENTITY)?;
    let m_deal = utils::parse_body(req_deal)?;
    Ok(Json(deal::modify(stores, customer, did, m_deal)?))
}

#[delete("/deals/<id>")]
pub async fn delete_deal(
    id: &str,
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Status, Kit8Error> {
    let did = utils::parse_id(id, Deal::ENTITY)?;
    deal::delete(stores, customer, did)?;
    Ok(Status::Ok)
}

#[get("/deals/stats")]
pub async fn get_deal_stats(
    customer: CustomerId,
    stores: &State<Stores>,
) -> Result<Json<DealStats>, Kit8Error> {
    Ok(Json(deal::stats(stores, customer)?))
}
// END JSON APIs

#[cfg(test)]
mod tests {
    use kit8_core::{
        auth::AuthConfig,
        repository::Stores,
        server,
        utils::ReleaseEnvironment,
    };
    use rocket::{
        http::{
            ContentType,
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
    fn list_contacts_test() {
        let client = client(Stores::fixture());
        let res = client.get("/api/crm/contacts").header(tenant("42")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Value = res.into_json().expect("json body");
        let contacts = body.as_array().expect("array");
        assert_eq!(contacts.len(), 2);
        assert!(contacts.iter().all(|c| c["customer_id"] == 42));
    }

    #[test]
    fn create_contact_ignores_client_tenant_test() {
        let client = client(Stores::fixture());
        let res = client
            .post("/api/crm/contacts")
            .header(ContentType::JSON)
            .header(tenant("42"))
            .body(r#"{"name":"Ivan Petrov","email":"ivan@example.com","customer_id":7}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body["customer_id"], 42);
        assert_eq!(body["name"], "Ivan Petrov");
    }

    #[test]
    fn create_deal_starts_new_test() {
        let client = client(Stores::fixture());
        let res = client
            .post("/api/crm/deals")
            .header(tenant("9"))
            .body(r#"{"title":"Deal","value":500.0,"stage":"won","customer_id":1}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body["stage"], "new");
        assert_eq!(body["customer_id"], 9);
    }

    #[test]
    fn invalid_ids_test() {
        let client = client(Stores::fixture());
        let cases = [
            ("/api/crm/contacts/abc", "Invalid contact ID"),
            ("/api/crm/deals/abc", "Invalid deal ID"),
        ];
        for (path, message) in cases {
            let res = client.put(path).header(tenant("1")).body("{}").dispatch();
            assert_eq!(res.status(), Status::BadRequest);
            let body: Value = res.into_json().expect("json body");
            assert_eq!(body["error"], message);
            let res = client.delete(path).header(tenant("1")).dispatch();
            assert_eq!(res.status(), Status::BadRequest);
            let body: Value = res.into_json().expect("json body");
            assert_eq!(body["error"], message);
        }
    }

    #[test]
    fn malformed_body_test() {
        let client = client(Stores::fixture());
        for (method_put, path) in [
            (false, "/api/crm/contacts"),
            (true, "/api/crm/contacts/3"),
            (false, "/api/crm/deals"),
            (true, "/api/crm/deals/3"),
        ] {
            let req = if method_put {
                client.put(path)
            } else {
                client.post(path)
            };
            let res = req.header(tenant("1")).body("{not json").dispatch();
            assert_eq!(res.status(), Status::BadRequest);
            let body: Value = res.into_json().expect("json body");
            assert_eq!(body["error"], "Invalid request body");
        }
    }

    #[test]
    fn null_fields_take_zero_value_test() {
        let client = client(Stores::fixture());
        let res = client
            .post("/api/crm/deals")
            .header(tenant("1"))
            .body(r#"{"title":"x","contact_id":null,"value":null,"stage":"new"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body["contact_id"], 0);
        assert_eq!(body["value"], 0.0);
        let res = client
            .post("/api/crm/contacts")
            .header(tenant("1"))
            .body(r#"{"name":"Ivan","phone":null}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body["phone"], "");
        let res = client
            .post("/api/crm/deals")
            .header(tenant("1"))
            .body(r#"{"title":"x","stage":"closed"}"#)
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn delete_returns_empty_ok_test() {
        let client = client(Stores::fixture());
        let res = client.delete("/api/crm/deals/3").header(tenant("1")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert!(res.into_string().unwrap_or_default().is_empty());
    }

    #[test]
    fn update_stamps_path_id_test() {
        let client = client(Stores::fixture());
        let res = client
            .put("/api/crm/contacts/15")
            .header(tenant("4"))
            .body(r#"{"id":1,"name":"Maria","customer_id":8}"#)
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body["id"], 15);
        assert_eq!(body["customer_id"], 4);
    }

    #[test]
    fn deal_stats_test() {
        let client = client(Stores::fixture());
        let res = client.get("/api/crm/deals/stats").header(tenant("4")).dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body["total_count"], 10);
        assert_eq!(body["won_count"], 4);
        assert_eq!(body["average_value"], 12500.0);
    }

    #[test]
    fn missing_tenant_test() {
        let client = client(Stores::fixture());
        let res = client.get("/api/crm/contacts").dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body["error"], "Unauthorized");
    }

    #[test]
    fn bearer_token_in_production_test() {
        let auth = AuthConfig::new(ReleaseEnvironment::Production, "crm-secret", 60);
        let token = auth.create_token(31).expect("token");
        let rocket = server::base(
            rocket::Config::debug_default(),
            auth,
            Stores::fixture(),
        )
        .mount(crate::BASE, crate::routes());
        let client = Client::tracked(rocket).expect("valid rocket instance");
        let res = client.get("/api/crm/deals").header(tenant("31")).dispatch();
        assert_eq!(res.status(), Status::Unauthorized);
        let res = client
            .get("/api/crm/deals")
            .header(Header::new("Authorization", format!("Bearer {}", token)))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body: Value = res.into_json().expect("json body");
        assert!(body
            .as_array()
            .expect("array")
            .iter()
            .all(|d| d["customer_id"] == 31));
    }

    #[test]
    fn memory_store_isolates_tenants_test() {
        let client = client(Stores::memory());
        let res = client
            .post("/api/crm/contacts")
            .header(tenant("1"))
            .body(r#"{"name":"Only mine"}"#)
            .dispatch();
        let created: Value = res.into_json().expect("json body");
        let id = created["id"].as_i64().expect("id");
        let res = client.get("/api/crm/contacts").header(tenant("2")).dispatch();
        let body: Value = res.into_json().expect("json body");
        assert_eq!(body.as_array().map(|a| a.len()), Some(0));
        let res = client
            .delete(format!("/api/crm/contacts/{}", id))
            .header(tenant("2"))
            .dispatch();
        assert_eq!(res.status(), Status::NotFound);
        let res = client
            .delete(format!("/api/crm/contacts/{}", id))
            .header(tenant("1"))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
    }
}
