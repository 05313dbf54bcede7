// Contract tests for the customer and credit JSON shapes
//
// Checks wire field names (camelCase), required fields, value types and
// that secrets never leave the service.

use chrono::NaiveDate;
use credit_desk::credits::{Credit, CreditDto, CreditStatus, CreditSummary, CreditView};
use credit_desk::customers::{Address, Customer, CustomerDto, CustomerUpdateDto, CustomerView};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

fn customer() -> Customer {
    let mut customer = Customer::new(
        "Francisco".to_string(),
        "Nascimento".to_string(),
        "10250788616".to_string(),
        "teste@teste.com".to_string(),
        dec!(1000.00),
        "12345".to_string(),
        Address::new("12345".to_string(), "Rua do Teste".to_string()).unwrap(),
    )
    .unwrap();
    customer.id = Some(1);
    customer
}

fn credit() -> Credit {
    let mut credit = Credit::new(
        dec!(1000.00),
        NaiveDate::from_ymd_opt(2030, 4, 22).unwrap(),
        2,
        1,
    );
    credit.id = Some(7);
    credit
}

fn keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    keys
}

#[test]
fn test_create_customer_request_schema() {
    let request = json!({
        "firstName": "Francisco",
        "lastName": "Nascimento",
        "cpf": "10250788616",
        "email": "teste@teste.com",
        "income": 1000.0,
        "password": "12345",
        "zipCode": "12345",
        "street": "Rua do Teste"
    });

    let dto: CustomerDto = serde_json::from_value(request).expect("request accepted");
    assert_eq!(dto.zip_code, "12345");
    assert_eq!(dto.income, dec!(1000));
}

#[test]
fn test_create_customer_request_requires_every_field() {
    for missing in ["firstName", "lastName", "cpf", "email", "income", "password", "zipCode", "street"] {
        let mut request = json!({
            "firstName": "Francisco",
            "lastName": "Nascimento",
            "cpf": "10250788616",
            "email": "teste@teste.com",
            "income": 1000.0,
            "password": "12345",
            "zipCode": "12345",
            "street": "Rua do Teste"
        });
        request.as_object_mut().unwrap().remove(missing);

        assert!(
            serde_json::from_value::<CustomerDto>(request).is_err(),
            "{} is required",
            missing
        );
    }
}

#[test]
fn test_update_customer_request_schema() {
    let request = json!({
        "firstName": "FranciscoUpdate",
        "lastName": "Nascimento",
        "income": "5000.0",
        "zipCode": "3040",
        "street": "Rua do Teste"
    });

    let dto: CustomerUpdateDto = serde_json::from_value(request).expect("request accepted");
    assert_eq!(dto.first_name, "FranciscoUpdate");
    assert_eq!(dto.income, dec!(5000.0));
}

#[test]
fn test_customer_response_schema() {
    let response = serde_json::to_value(CustomerView::from(customer())).unwrap();

    assert_eq!(
        keys(&response),
        vec!["cpf", "credits", "email", "firstName", "id", "income", "lastName", "street", "zipCode"]
    );
    assert!(response["id"].is_i64(), "id must be integer");
    assert!(response["credits"].is_array(), "credits must be array");
    assert!(response.get("password").is_none(), "password must not be exposed");
}

#[test]
fn test_create_credit_request_schema() {
    let request = json!({
        "creditValue": 1000.0,
        "dayFirstInstallment": "2030-04-22",
        "numberOfInstallments": 2,
        "customerId": 1
    });

    let dto: CreditDto = serde_json::from_value(request).expect("request accepted");
    assert_eq!(dto.day_first_installment, NaiveDate::from_ymd_opt(2030, 4, 22).unwrap());
    assert_eq!(dto.customer_id, 1);
}

#[test]
fn test_credit_response_schema() {
    let credit = credit();
    let code = credit.credit_code.to_string();
    let response = serde_json::to_value(CreditView::new(credit, &customer())).unwrap();

    assert_eq!(
        keys(&response),
        vec![
            "creditCode",
            "creditValue",
            "customerId",
            "dayFirstInstallment",
            "emailCustomer",
            "incomeCustomer",
            "numberOfInstallments",
            "status"
        ]
    );
    assert_eq!(response["creditCode"], code.as_str());
    assert_eq!(response["dayFirstInstallment"], "2030-04-22");
    assert_eq!(response["status"], "in_progress");
    assert_eq!(response["emailCustomer"], "teste@teste.com");
    assert!(response.get("id").is_none(), "storage id must not be exposed");
}

#[test]
fn test_credit_summary_schema() {
    let response = serde_json::to_value(CreditSummary::from(credit())).unwrap();

    assert_eq!(
        keys(&response),
        vec!["creditCode", "creditValue", "numberOfInstallments"]
    );
    assert_eq!(response["numberOfInstallments"], 2);
}

#[test]
fn test_credit_status_values() {
    for (status, wire) in [
        (CreditStatus::InProgress, "in_progress"),
        (CreditStatus::Approved, "approved"),
        (CreditStatus::Rejected, "rejected"),
    ] {
        assert_eq!(serde_json::to_value(status).unwrap(), wire);
    }
}
