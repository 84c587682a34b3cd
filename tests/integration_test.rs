use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bean_copy::model::{Address, AddressDto, Person, PersonDto};
use bean_copy::{
    copy, copy_excluding, copy_full, copy_with_zero_policy, record, CopyError, Side,
};

fn sample_dto() -> PersonDto {
    PersonDto::new("feiwo", 12, "changsha", "yuelu")
}

/// Nested records are copied leaf by leaf without declaring the nesting.
#[test]
fn test_copy_flattens_nested_records() {
    let dto = sample_dto();
    let mut person = Person::default();

    copy(&dto, &mut person).expect("copy failed");

    assert_eq!(
        person,
        Person {
            name: "feiwo".into(),
            age: 12,
            address: Address::new("changsha", "yuelu"),
        }
    );
}

/// Zero source values leave the target alone unless zero suppression is off.
#[test]
fn test_zero_policy() {
    let mut dto = sample_dto();
    dto.age = 0;
    dto.address.city.clear();

    let mut kept = Person {
        age: 12,
        address: Address::new("shenz", ""),
        ..Person::default()
    };
    copy_with_zero_policy(&dto, &mut kept, true).unwrap();
    assert_eq!(kept.age, 12);
    assert_eq!(kept.address.city, "shenz");
    assert_eq!(kept.address.area, "yuelu");

    let mut overwritten = kept.clone();
    copy_with_zero_policy(&dto, &mut overwritten, false).unwrap();
    assert_eq!(overwritten.age, 0);
    assert_eq!(overwritten.address.city, "");
    assert_eq!(overwritten.name, "feiwo");
}

/// The plain entry point suppresses zero values.
#[test]
fn test_plain_copy_suppresses_zero() {
    let dto = PersonDto {
        name: String::new(),
        ..sample_dto()
    };
    let mut person = Person {
        name: "xiaoqi".into(),
        ..Person::default()
    };
    copy(&dto, &mut person).unwrap();
    assert_eq!(person.name, "xiaoqi");
    assert_eq!(person.age, 12);
}

/// Excluded target names are never written, even from a non-zero source.
#[test]
fn test_exclusion() {
    let dto = sample_dto();
    let mut person = Person {
        name: "xiaoqi".into(),
        ..Person::default()
    };

    copy_excluding(&dto, &mut person, &["name"]).unwrap();

    assert_eq!(person.name, "xiaoqi");
    assert_eq!(person.age, 12);
    assert_eq!(person.address, Address::new("changsha", "yuelu"));
}

/// Exclusions apply to nested leaves by their bare name.
#[test]
fn test_exclusion_of_nested_leaf_with_zero_copy() {
    let mut dto = sample_dto();
    dto.age = 0;
    let mut person = Person {
        age: 30,
        address: Address::new("shenzhen", "nanshan"),
        ..Person::default()
    };

    copy_full(&dto, &mut person, false, &["city"]).unwrap();

    assert_eq!(person.age, 0);
    assert_eq!(person.address.city, "shenzhen");
    assert_eq!(person.address.area, "yuelu");
}

/// Non-record arguments are rejected on either side and nothing is written.
#[test]
fn test_guard_rejects_non_records() {
    let dto = sample_dto();
    let mut person = Person::default();

    let err = copy(&"feiwo".to_string(), &mut person).unwrap_err();
    assert_eq!(err, CopyError::InvalidArgumentKind { side: Side::Source });
    assert_eq!(person, Person::default());

    let mut age = 3i32;
    let err = copy_full(&dto, &mut age, false, &[]).unwrap_err();
    assert_eq!(err, CopyError::InvalidArgumentKind { side: Side::Target });
    assert_eq!(age, 3);

    let mut missing: Option<Person> = None;
    let err = copy(&dto, &mut missing).unwrap_err();
    assert_eq!(err, CopyError::InvalidArgumentKind { side: Side::Target });
    assert!(missing.is_none());
}

/// References behind `Box` and `Option` are accepted as arguments.
#[test]
fn test_boxed_and_optional_arguments() {
    let dto = Box::new(sample_dto());
    let mut person = Some(Person::default());

    copy(&dto, &mut person).unwrap();

    assert_eq!(person.map(|p| p.address.area), Some("yuelu".to_string()));
}

/// Same name with a different kind is never copied.
#[test]
fn test_kind_mismatch_is_noop() {
    #[derive(Default)]
    struct TextAge {
        name: String,
        age: String,
    }

    #[derive(Default)]
    struct WideAge {
        age: i64,
    }

    record! {
        TextAge { name, age };
        WideAge { age };
    }

    let source = TextAge {
        name: "feiwo".into(),
        age: "12".into(),
    };

    for suppress_zero in [true, false] {
        let mut person = Person {
            age: 40,
            ..Person::default()
        };
        copy_with_zero_policy(&source, &mut person, suppress_zero).unwrap();
        assert_eq!(person.age, 40);
        assert_eq!(person.name, "feiwo");

        let mut wide = WideAge { age: 5 };
        copy_with_zero_policy(&sample_dto(), &mut wide, suppress_zero).unwrap();
        assert_eq!(wide.age, 5);
    }
}

/// Records with no fields in common copy nothing and report no error.
#[test]
fn test_no_match_no_error() {
    #[derive(Debug, Default, PartialEq)]
    struct Invoice {
        number: u64,
        total: f64,
    }

    record! {
        Invoice { number, total };
    }

    let mut invoice = Invoice {
        number: 9,
        total: 1.5,
    };
    copy_full(&sample_dto(), &mut invoice, false, &[]).unwrap();
    assert_eq!(
        invoice,
        Invoice {
            number: 9,
            total: 1.5
        }
    );
}

/// A second identical call changes nothing.
#[test]
fn test_idempotence() {
    let mut dto = sample_dto();
    dto.address.area.clear();

    for suppress_zero in [true, false] {
        let mut once = Person {
            address: Address::new("", "furong"),
            ..Person::default()
        };
        copy_with_zero_policy(&dto, &mut once, suppress_zero).unwrap();

        let mut twice = once.clone();
        copy_with_zero_policy(&dto, &mut twice, suppress_zero).unwrap();

        assert_eq!(once, twice);
    }
}

/// Copies work in the reverse direction too; only shapes matter.
#[test]
fn test_domain_to_dto() {
    let person = Person {
        name: "feiwo".into(),
        age: 12,
        address: Address::new("changsha", "yuelu"),
    };
    let mut dto = PersonDto::default();

    copy(&person, &mut dto).unwrap();

    assert_eq!(dto, sample_dto());
    assert_eq!(
        dto.address,
        AddressDto {
            city: "changsha".into(),
            area: "yuelu".into()
        }
    );
}

/// A DTO decoded from JSON feeds straight into the domain record.
#[test]
fn test_copy_from_decoded_dto() {
    let dto: PersonDto = serde_json::from_str(r#"{ "name": "feiwo", "age": 12 }"#).unwrap();
    let mut person = Person {
        address: Address::new("changsha", "yuelu"),
        ..Person::default()
    };

    copy(&dto, &mut person).unwrap();

    assert_eq!(person.name, "feiwo");
    assert_eq!(person.address, Address::new("changsha", "yuelu"));
}

/// Arrays, tuples and std value types are leaves copied as whole values.
#[test]
fn test_std_value_leaves() {
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Endpoint {
        addr: [u8; 4],
        port: u16,
        timeout: Duration,
        root: PathBuf,
        bounds: (u32, u32),
        label: &'static str,
        owner: Arc<String>,
    }

    record! {
        Endpoint { addr, port, timeout, root, bounds, label, owner };
    }

    let source = Endpoint {
        addr: [10, 0, 0, 1],
        port: 8080,
        timeout: Duration::from_secs(5),
        root: PathBuf::from("/srv"),
        bounds: (1, 64),
        label: "primary",
        owner: Arc::new("feiwo".into()),
    };
    let mut target = Endpoint::default();
    copy(&source, &mut target).unwrap();
    assert_eq!(target, source);

    let mut kept = Endpoint {
        addr: [192, 168, 1, 1],
        timeout: Duration::from_millis(250),
        ..Endpoint::default()
    };
    let partial = Endpoint {
        addr: [0; 4],
        port: 9090,
        ..Endpoint::default()
    };
    copy(&partial, &mut kept).unwrap();
    assert_eq!(kept.addr, [192, 168, 1, 1]);
    assert_eq!(kept.timeout, Duration::from_millis(250));
    assert_eq!(kept.port, 9090);

    copy_with_zero_policy(&partial, &mut kept, false).unwrap();
    assert_eq!(kept.addr, [0; 4]);
    assert_eq!(kept.timeout, Duration::ZERO);
}

/// Arrays only pair with arrays of the same length and element type.
#[test]
fn test_array_length_must_agree() {
    #[derive(Default)]
    struct Short {
        addr: [u8; 4],
    }

    #[derive(Default)]
    struct Long {
        addr: [u8; 16],
    }

    record! {
        Short { addr };
        Long { addr };
    }

    let mut long = Long { addr: [7; 16] };
    copy_with_zero_policy(&Short { addr: [1; 4] }, &mut long, false).unwrap();
    assert_eq!(long.addr, [7; 16]);
}
