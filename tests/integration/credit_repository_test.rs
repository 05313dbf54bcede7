// Repository tests against a real MySQL database
//
// Run with: TEST_DATABASE_URL=mysql://... cargo test --test credit_repository_test -- --ignored --test-threads=1

#[path = "../helpers/mod.rs"]
mod helpers;

use chrono::Days;
use credit_desk::credits::{Credit, CreditRepository, CreditStatus, MySqlCreditRepository};
use credit_desk::customers::{CustomerRepository, MySqlCustomerRepository};
use helpers::*;
use rust_decimal_macros::dec;
use sqlx::MySqlPool;

async fn setup() -> (MySqlPool, MySqlCreditRepository, i64) {
    let pool = create_test_pool().await;
    clear_tables(&pool).await;

    let customers = MySqlCustomerRepository::new(pool.clone());
    let customer = customers
        .insert(&TestDataFactory::customer(&TestDataFactory::random_cpf()))
        .await
        .expect("customer inserted");

    let customer_id = customer.id.expect("generated id");
    (pool.clone(), MySqlCreditRepository::new(pool), customer_id)
}

fn credit(customer_id: i64) -> Credit {
    Credit::new(
        dec!(500.00),
        TestDataFactory::days_from_today(15),
        5,
        customer_id,
    )
}

#[actix_web::test]
#[ignore]
async fn should_find_credit_by_credit_code() {
    let (_pool, repo, customer_id) = setup().await;
    let first = repo.insert(&credit(customer_id)).await.unwrap();
    let second = repo.insert(&credit(customer_id)).await.unwrap();

    let found = repo
        .find_by_credit_code(second.credit_code)
        .await
        .unwrap()
        .expect("credit exists");

    assert_eq!(found.id, second.id);
    assert_eq!(found.credit_code, second.credit_code);
    assert_ne!(found.credit_code, first.credit_code);
    assert_eq!(found.credit_value, dec!(500.00));
    assert_eq!(found.status, CreditStatus::InProgress);
    assert_eq!(
        found.day_first_installment,
        TestDataFactory::days_from_today(15)
    );
}

#[actix_web::test]
#[ignore]
async fn should_return_none_for_unknown_credit_code() {
    let (_pool, repo, _) = setup().await;

    let found = repo
        .find_by_credit_code(uuid::Uuid::new_v4())
        .await
        .unwrap();

    assert!(found.is_none());
}

#[actix_web::test]
#[ignore]
async fn should_find_all_credits_by_customer_id() {
    let (pool, repo, customer_id) = setup().await;

    let customers = MySqlCustomerRepository::new(pool);
    let other = customers
        .insert(&TestDataFactory::customer(&TestDataFactory::random_cpf()))
        .await
        .unwrap();

    let first = repo.insert(&credit(customer_id)).await.unwrap();
    let mut later = credit(customer_id);
    later.day_first_installment = later
        .day_first_installment
        .checked_add_days(Days::new(5))
        .unwrap();
    let second = repo.insert(&later).await.unwrap();
    repo.insert(&credit(other.id.unwrap())).await.unwrap();

    let credits = repo.find_all_by_customer_id(customer_id).await.unwrap();

    let codes: Vec<_> = credits.iter().map(|c| c.credit_code).collect();
    assert_eq!(codes, vec![first.credit_code, second.credit_code]);
    assert!(repo.find_all_by_customer_id(-1).await.unwrap().is_empty());
}

#[actix_web::test]
#[ignore]
async fn should_reject_credit_for_missing_customer() {
    let (_pool, repo, _) = setup().await;

    let result = repo.insert(&credit(i64::MAX)).await;

    assert!(result.is_err());
}

#[actix_web::test]
#[ignore]
async fn should_restrict_customer_delete_while_credits_exist() {
    let (pool, repo, customer_id) = setup().await;
    repo.insert(&credit(customer_id)).await.unwrap();

    let customers = MySqlCustomerRepository::new(pool);
    let result = customers.delete(customer_id).await;

    assert!(result.is_err());
    assert!(customers.find_by_id(customer_id).await.unwrap().is_some());
}

#[actix_web::test]
#[ignore]
async fn should_enforce_unique_cpf() {
    let (pool, _repo, _) = setup().await;
    let customers = MySqlCustomerRepository::new(pool);
    let cpf = TestDataFactory::random_cpf();

    customers
        .insert(&TestDataFactory::customer(&cpf))
        .await
        .unwrap();
    let duplicate = customers.insert(&TestDataFactory::customer(&cpf)).await;

    assert!(matches!(
        duplicate,
        Err(credit_desk::core::AppError::Conflict(_))
    ));
}
