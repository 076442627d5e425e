//! Tests for the registration domain service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{FixtureDriverRepository, FixturePassengerRepository};

fn service() -> RegistrationService<FixtureDriverRepository, FixturePassengerRepository> {
    RegistrationService::new(
        Arc::new(FixtureDriverRepository::new()),
        Arc::new(FixturePassengerRepository::new()),
    )
}

fn driver_request(mobile: &str, license: &str) -> DriverRegistrationRequest {
    DriverRegistrationRequest {
        full_name: "Asha Verma".to_owned(),
        mobile_number: mobile.to_owned(),
        license_number: license.to_owned(),
        city: None,
    }
}

fn passenger_request(mobile: &str) -> PassengerRegistrationRequest {
    PassengerRegistrationRequest {
        full_name: "Ravi Iyer".to_owned(),
        mobile_number: mobile.to_owned(),
        city: "Faridabad".to_owned(),
    }
}

#[actix_rt::test]
async fn fresh_driver_registers_exactly_once() {
    let svc = service();

    let first = svc
        .register_driver(driver_request("9999999999", "dl1"))
        .await
        .expect("first registration succeeds");
    assert_eq!(first.message, DRIVER_SUCCESS_MESSAGE);
    assert!(first.is_early_bird);

    let second = svc
        .register_driver(driver_request("9999999999", "dl2"))
        .await
        .expect_err("same mobile is rejected");
    assert_eq!(second.code(), ErrorCode::DuplicateRecord);
    assert_eq!(second.message(), DRIVER_DUPLICATE_MESSAGE);
}

#[actix_rt::test]
async fn duplicate_license_with_fresh_mobile_is_rejected() {
    let svc = service();

    svc.register_driver(driver_request("9999999999", "dl1"))
        .await
        .expect("first registration succeeds");

    let error = svc
        .register_driver(driver_request("8888888888", "dl1"))
        .await
        .expect_err("same licence is rejected");
    assert_eq!(error.code(), ErrorCode::DuplicateRecord);
    assert_eq!(error.message(), DRIVER_DUPLICATE_MESSAGE);
}

#[actix_rt::test]
async fn license_uniqueness_is_case_insensitive() {
    let svc = service();

    svc.register_driver(driver_request("9999999999", "dl-123"))
        .await
        .expect("first registration succeeds");

    let error = svc
        .register_driver(driver_request("8888888888", "DL-123"))
        .await
        .expect_err("uppercased variant collides");
    assert_eq!(error.code(), ErrorCode::DuplicateRecord);
}

#[rstest]
#[case("12345")]
#[case("12345678901")]
#[case("12345abcde")]
#[actix_rt::test]
async fn malformed_mobile_numbers_fail_validation(#[case] mobile: &str) {
    let svc = service();

    let error = svc
        .register_driver(driver_request(mobile, "dl1"))
        .await
        .expect_err("mobile format is enforced");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[actix_rt::test]
async fn driver_record_is_stored_normalised() {
    let drivers = Arc::new(FixtureDriverRepository::new());
    let svc = RegistrationService::new(
        Arc::clone(&drivers),
        Arc::new(FixturePassengerRepository::new()),
    );

    let mut request = driver_request("9999999999", "dl1");
    request.city = Some(String::new());
    svc.register_driver(request).await.expect("registers");

    let records = drivers.records();
    assert_eq!(records.len(), 1);
    let record = records.first().expect("one record");
    assert_eq!(record.license_number().as_ref(), "DL1");
    assert_eq!(record.city().as_ref(), "Delhi NCR");
}

#[actix_rt::test]
async fn early_bird_flag_flips_after_the_limit() {
    let svc = service();

    for n in 0..EARLY_BIRD_LIMIT {
        let mobile = format!("9{n:09}");
        let license = format!("DL{n}");
        let response = svc
            .register_driver(driver_request(&mobile, &license))
            .await
            .expect("registration succeeds");
        assert!(response.is_early_bird, "driver {} should be early bird", n + 1);
    }

    let over_limit = svc
        .register_driver(driver_request("8000000000", "DL-OVER"))
        .await
        .expect("driver 501 still registers");
    assert!(!over_limit.is_early_bird);
}

#[actix_rt::test]
async fn passenger_duplicate_check_only_considers_mobile() {
    let svc = service();

    svc.register_passenger(passenger_request("7777777777"))
        .await
        .expect("first registration succeeds");

    let mut different_details = passenger_request("7777777777");
    different_details.full_name = "Meera Nair".to_owned();
    different_details.city = "Noida".to_owned();
    let error = svc
        .register_passenger(different_details)
        .await
        .expect_err("same mobile is rejected despite different details");
    assert_eq!(error.code(), ErrorCode::DuplicateRecord);
    assert_eq!(error.message(), PASSENGER_DUPLICATE_MESSAGE);
}

#[actix_rt::test]
async fn passenger_success_returns_notification_message() {
    let svc = service();

    let response = svc
        .register_passenger(passenger_request("7777777777"))
        .await
        .expect("registration succeeds");
    assert_eq!(response.message, PASSENGER_SUCCESS_MESSAGE);
}

#[actix_rt::test]
async fn passenger_city_is_required() {
    let svc = service();

    let mut request = passenger_request("7777777777");
    request.city = String::new();
    let error = svc
        .register_passenger(request)
        .await
        .expect_err("empty city fails validation");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[actix_rt::test]
async fn mobile_numbers_do_not_collide_across_record_types() {
    let svc = service();

    svc.register_driver(driver_request("6666666666", "dl9"))
        .await
        .expect("driver registers");
    svc.register_passenger(passenger_request("6666666666"))
        .await
        .expect("passenger with the same mobile registers");
}
