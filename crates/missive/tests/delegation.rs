//! End-to-end decorator scenario: a `Partition` wrapping an optional event,
//! forwarding undefined members to it.

use std::any::Any;

use missive::delegate;
use missive::prelude::*;
use once_cell::sync::Lazy;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Person {
    name: &'static str,
}

struct Event {
    person: Person,
}

static EVENT_MEMBERS: Lazy<MemberTable> = Lazy::new(|| {
    MemberTable::builder("Event")
        .public("person", |obj, _| {
            let event: &Event = receiver(obj)?;
            Ok(Value::new(event.person.clone()))
        })
        .public("title", |_, _| Ok(Value::new(String::from("launch day"))))
        .public("kind", |_, _| Ok(Value::new("event")))
        .public("map_person", |obj, mut args| {
            let event: &Event = receiver(obj)?;
            let block = args
                .take_block()
                .ok_or(MemberError::MissingArgument { index: 0 })?;
            block.call(vec![Value::new(event.person.clone())])
        })
        .public("explode", |_, _| {
            Err(MemberError::raised(std::io::Error::other("boom")))
        })
        .private("audit_token", |_, _| Ok(Value::new("secret")))
        .build()
});

impl Object for Event {
    fn members(&self) -> &'static MemberTable {
        &EVENT_MEMBERS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct Partition {
    event: Option<Event>,
}

static PARTITION_MEMBERS: Lazy<MemberTable> = Lazy::new(|| {
    MemberTable::builder("Partition")
        .public("kind", |_, _| Ok(Value::new("partition")))
        .build()
});

static PARTITION_ACCESSOR: Lazy<TargetAccessor> =
    Lazy::new(|| TargetAccessor::install("event", AccessorKind::Field).unwrap());

impl Object for Partition {
    fn members(&self) -> &'static MemberTable {
        &PARTITION_MEMBERS
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Delegating for Partition {
    fn accessor(&self) -> &'static TargetAccessor {
        &PARTITION_ACCESSOR
    }

    fn target(&self) -> Option<&dyn Object> {
        self.event.as_ref().map(|event| event as &dyn Object)
    }
}

fn partition() -> Partition {
    Partition {
        event: Some(Event {
            person: Person { name: "ada" },
        }),
    }
}

#[test]
fn delegated_person_matches_direct_person() {
    let partition = partition();
    let event = Event {
        person: Person { name: "ada" },
    };

    let forwarded = send(&partition, "person", Args::new()).unwrap();
    let direct = missive::object::send(&event, "person", Args::new()).unwrap();
    assert_eq!(
        forwarded.downcast::<Person>().unwrap(),
        direct.downcast::<Person>().unwrap()
    );
}

#[test]
fn nil_target_diagnoses_member_and_accessor() {
    let empty = Partition { event: None };

    let err = send(&empty, "title", Args::new()).unwrap_err();
    let delegate::Error::Delegation(err) = err else {
        panic!("expected delegation error, got {err}");
    };
    let message = err.to_string();
    assert!(message.contains("title"));
    assert!(message.contains("event"));
}

#[test]
fn unknown_member_with_live_target_stays_ordinary() {
    let err = send(&partition(), "venue", Args::new()).unwrap_err();
    assert!(matches!(
        err,
        delegate::Error::Member(MemberError::NoSuchMember { ref member, .. }) if member == "venue"
    ));
}

#[test]
fn host_definition_wins_over_target() {
    let value = send(&partition(), "kind", Args::new()).unwrap();
    assert_eq!(value.downcast::<&str>().unwrap(), "partition");
}

#[test]
fn private_target_member_stays_private() {
    let partition = partition();

    assert!(!responds_to(&partition, "audit_token", false));
    assert!(!responds_to(&partition, "audit_token", true));

    let err = send(&partition, "audit_token", Args::new()).unwrap_err();
    assert!(matches!(
        err,
        delegate::Error::Member(MemberError::NoSuchMember { .. })
    ));
}

#[test]
fn target_error_propagates_verbatim() {
    let err = send(&partition(), "explode", Args::new()).unwrap_err();
    let delegate::Error::Member(err) = err else {
        panic!("expected member error, got {err}");
    };
    assert_eq!(err.to_string(), "boom");
}

#[test]
fn block_forwards_through_delegation() {
    let block = Block::new(|mut values| {
        let person = values
            .remove(0)
            .downcast::<Person>()
            .map_err(|_| MemberError::ArgumentMismatch {
                index: 0,
                expected: "Person",
            })?;
        Ok(Value::new(person.name))
    });

    let value = send(&partition(), "map_person", Args::new().block(block)).unwrap();
    assert_eq!(value.downcast::<&str>().unwrap(), "ada");
}

#[test]
fn successful_delegation_looks_native() {
    let partition = partition();

    assert!(responds_to(&partition, "person", false));
    assert!(responds_to(&partition, "title", false));
    assert!(responds_to(&partition, "kind", false));
    assert!(!responds_to(&partition, "venue", false));

    let title = send(&partition, "title", Args::new()).unwrap();
    assert_eq!(title.downcast::<String>().unwrap(), "launch day");
}

#[test]
fn tables_bootstrap_through_registry() {
    let mut builder = Registry::builder();
    builder.register("event", || &*EVENT_MEMBERS).unwrap();
    builder.register("partition", || &*PARTITION_MEMBERS).unwrap();
    let registry: Registry<&'static MemberTable> = builder.build();

    assert!(!registry.is_loaded("event"));
    let table = registry.get("event").unwrap();
    assert!(table.responds_to("person", false));
    assert!(registry.is_loaded("event"));

    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["event", "partition"]);
}
