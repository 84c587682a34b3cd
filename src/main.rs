//! # Bean Copy Demo
//!
//! Walks through the four copy entry points with the sample records in
//! [`bean_copy::model`]:
//! 1.  A plain copy of a `PersonDto` into an empty `Person`.
//! 2.  A copy that also writes zero values.
//! 3.  A copy that protects a target field by name.
//! 4.  An account update that keeps the stored id and skips unset form fields.

use bean_copy::lifecycle::setup_tracing;
use bean_copy::model::{Account, AccountForm, Address, Person, PersonDto, ShippingForm};
use bean_copy::{copy, copy_excluding, copy_with_zero_policy, Copier, CopyError, CopyOptions};
use tracing::{error, info};

fn main() -> Result<(), CopyError> {
    setup_tracing();

    info!("Starting bean copy demo");

    let dto = PersonDto::new("feiwo", 12, "changsha", "yuelu");

    let mut person = Person::default();
    copy(&dto, &mut person)?;
    info!(?person, "Plain copy");

    let mut partial = dto.clone();
    partial.address.city.clear();
    let mut person = Person {
        address: Address::new("shenzhen", ""),
        ..Person::default()
    };
    copy_with_zero_policy(&partial, &mut person, false)?;
    info!(?person, "Copy including zero values");

    let mut person = Person {
        name: "xiaoqi".into(),
        ..Person::default()
    };
    copy_excluding(&dto, &mut person, &["name"])?;
    info!(?person, "Copy excluding name");

    let mut account = Account {
        id: 42,
        username: "feiwo".into(),
        email: "feiwo@example.com".into(),
        ..Account::default()
    };
    let form = AccountForm {
        id: 7,
        email: "zhuyong@example.com".into(),
        active: true,
        nickname: Some("fw".into()),
        shipping: Some(ShippingForm {
            city: "changsha".into(),
            area: "yuelu".into(),
        }),
        ..AccountForm::default()
    };
    let copier = Copier::new(CopyOptions::new().with_exclude(["id"]));
    match copier.copy(&form, &mut account) {
        Ok(report) => info!(%report, ?account, "Account updated"),
        Err(e) => error!(error = %e, "Account update failed"),
    }

    if let Err(e) = copy(&dto, &mut 0u32) {
        info!(error = %e, "Rejected non-record target");
    }

    info!("Demo completed successfully");
    Ok(())
}
