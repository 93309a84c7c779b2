//! Tests for collaborator resolution and generator invocation.

use super::*;
use crate::generator::{Argument, Generator};
use crate::value::Value;
use config::parts::{Dimensions, PartCatalog};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<String>>>;

fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

fn echo(label: &str) -> Handler {
    Handler::new(label, |args: &[Value]| Ok(args.first().cloned().unwrap_or_default()))
}

fn nothing(_: &str) -> Option<Handler> {
    None
}

// =============================================================================
// FALLBACK CHAIN
// =============================================================================

#[test]
fn test_reserved_name_gets_noop_and_warning() {
    let captured: Rc<RefCell<Option<Arguments>>> = Rc::new(RefCell::new(None));
    let sink = captured.clone();

    let mut plan = HousePlan::new();
    plan.add(
        Generator::new(["stud", "length"], move |args| {
            *sink.borrow_mut() = Some(args.clone());
            Ok(())
        })
        .unwrap(),
        vec![Value::from(92.625)],
    );

    let report = plan.generate(nothing).unwrap();

    assert_eq!(
        report.warnings,
        vec![UnresolvedCollaborator {
            generator: 0,
            name: "stud".to_string(),
        }]
    );
    let args = captured.borrow_mut().take().unwrap();
    assert_eq!(args.len(), 2);
    assert!(args.handler(0).unwrap().is_noop());
    assert_eq!(args.number(1).unwrap(), 92.625);
}

#[test]
fn test_unknown_name_is_skipped_silently() {
    let lengths: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = lengths.clone();

    let mut plan = HousePlan::new();
    plan.add(
        Generator::new(["foo"], move |args| {
            sink.borrow_mut().push(args.len());
            Ok(())
        })
        .unwrap(),
        vec![Value::from(1.0)],
    );

    let report = plan.generate(nothing).unwrap();

    assert!(report.warnings.is_empty());
    assert_eq!(*lengths.borrow(), vec![1]);

    let resolution = plan.resolve_collaborators(0, &mut nothing).unwrap();
    assert!(resolution.handlers.is_empty());
    assert_eq!(resolution.skipped, vec!["foo".to_string()]);
}

#[test]
fn test_caller_handler_overrides_helper() {
    let custom = echo("custom slice");
    let expected = custom.clone();
    let mut plan = HousePlan::new();
    plan.add(Generator::new(["verticalSlice"], |_| Ok(())).unwrap(), vec![]);

    let mut resolve = |name: &str| (name == "verticalSlice").then(|| custom.clone());
    let resolution = plan.resolve_collaborators(0, &mut resolve).unwrap();

    assert_eq!(resolution.handlers[0].tier, Tier::Caller);
    assert!(resolution.handlers[0].handler.same_body(&expected));
}

#[test]
fn test_helper_used_when_caller_has_none() {
    let result: Rc<RefCell<Option<Value>>> = Rc::new(RefCell::new(None));
    let sink = result.clone();

    let mut plan = HousePlan::new();
    plan.add(
        Generator::new(["slopeToDegrees"], move |args| {
            let degrees = args.handler(0)?.call(&[Value::from(1.0)])?;
            *sink.borrow_mut() = Some(degrees);
            Ok(())
        })
        .unwrap(),
        vec![],
    );

    let report = plan.generate(nothing).unwrap();

    assert!(report.warnings.is_empty());
    let degrees = result.borrow().clone().unwrap().as_number().unwrap();
    assert!((degrees - 45.0).abs() < 1e-9);
}

#[test]
fn test_resolver_called_once_per_name_in_order() {
    let calls = log();
    let recorder = calls.clone();

    let mut plan = HousePlan::new();
    plan.add(Generator::new(["section", "trim"], |_| Ok(())).unwrap(), vec![]);
    plan.add(Generator::new(["door"], |_| Ok(())).unwrap(), vec![]);

    plan.generate(|name: &str| {
        recorder.borrow_mut().push(name.to_string());
        None
    })
    .unwrap();

    assert_eq!(*calls.borrow(), vec!["section", "trim", "door"]);
}

#[test]
fn test_handlers_precede_explicit_parameters() {
    let kinds = log();
    let sink = kinds.clone();

    let mut plan = HousePlan::new();
    plan.add(
        Generator::new(["section", "width", "getOverhangs"], move |args| {
            for arg in args.iter() {
                let kind = match arg {
                    Argument::Handler(handler) => format!("handler:{}", handler.label()),
                    Argument::Value(value) => format!("value:{}", value),
                };
                sink.borrow_mut().push(kind);
            }
            Ok(())
        })
        .unwrap(),
        vec![Value::from(1.0), Value::from("a")],
    );

    let section = echo("section");
    plan.generate(|name: &str| (name == "section").then(|| section.clone()))
        .unwrap();

    assert_eq!(
        *kinds.borrow(),
        vec![
            "handler:section",
            "handler:getOverhangs",
            "value:1",
            "value:\"a\"",
        ]
    );
}

// =============================================================================
// DECORATION
// =============================================================================

#[test]
fn test_caller_handler_gets_catalog_dimensions() {
    let mut plan = HousePlan::new();
    plan.add(Generator::new(["stud", "plywood"], |_| Ok(())).unwrap(), vec![]);

    let stud = echo("stud");
    let mut resolve = |name: &str| (name == "stud").then(|| stud.clone());
    let resolution = plan.resolve_collaborators(0, &mut resolve).unwrap();

    let stud = &resolution.handlers[0].handler;
    assert_eq!(stud.width(), Some(1.25));
    assert_eq!(stud.depth(), Some(2.5));
    assert_eq!(stud.thickness(), None);

    let plywood = &resolution.handlers[1];
    assert_eq!(plywood.tier, Tier::Noop);
    assert_eq!(plywood.handler.thickness(), Some(0.375));
}

#[test]
fn test_decoration_keeps_caller_dimensions() {
    let mut plan = HousePlan::new();
    plan.add(Generator::new(["door"], |_| Ok(())).unwrap(), vec![]);

    let door = echo("door").with_dimensions(Dimensions::NONE.with_width(36.0));
    let mut resolve = |_: &str| Some(door.clone());
    let resolution = plan.resolve_collaborators(0, &mut resolve).unwrap();

    let door = &resolution.handlers[0].handler;
    assert_eq!(door.width(), Some(36.0));
    assert_eq!(door.height(), Some(80.0));
    assert_eq!(door.thickness(), Some(1.5));
}

#[test]
fn test_decoration_is_idempotent() {
    let mut plan = HousePlan::new();
    plan.add(Generator::new(["trim"], |_| Ok(())).unwrap(), vec![]);
    plan.add(Generator::new(["trim"], |_| Ok(())).unwrap(), vec![]);

    let trim = echo("trim");
    let mut resolve = |_: &str| Some(trim.clone());
    let first = plan.resolve_collaborators(0, &mut resolve).unwrap();
    let once = first.handlers[0].handler.clone();

    let mut again = |_: &str| Some(once.clone());
    let second = plan.resolve_collaborators(1, &mut again).unwrap();

    assert_eq!(
        second.handlers[0].handler.dimensions(),
        first.handlers[0].handler.dimensions()
    );
}

#[test]
fn test_helpers_without_catalog_entry_stay_bare() {
    let mut plan = HousePlan::new();
    plan.add(Generator::new(["getJoinGaps"], |_| Ok(())).unwrap(), vec![]);

    let resolution = plan.resolve_collaborators(0, &mut nothing).unwrap();
    assert_eq!(resolution.handlers[0].tier, Tier::Helper);
    assert!(resolution.handlers[0].handler.dimensions().is_empty());
}

#[test]
fn test_custom_catalog() {
    let mut catalog = PartCatalog::empty();
    catalog
        .insert("section", Dimensions::NONE.with_height(96.0))
        .unwrap();
    let mut plan = HousePlan::new().with_catalog(catalog);
    plan.add(Generator::new(["section", "stud"], |_| Ok(())).unwrap(), vec![]);

    let resolution = plan.resolve_collaborators(0, &mut nothing).unwrap();
    assert_eq!(resolution.handlers[0].handler.height(), Some(96.0));
    assert!(resolution.handlers[1].handler.dimensions().is_empty());
}

// =============================================================================
// PASS CONTROL
// =============================================================================

#[test]
fn test_generators_run_in_registration_order() {
    let order = log();
    let mut plan = HousePlan::new();
    for label in ["foundation", "walls", "roof"] {
        let sink = order.clone();
        plan.add(
            Generator::new(["section"], move |_| {
                sink.borrow_mut().push(label.to_string());
                Ok(())
            })
            .unwrap(),
            vec![],
        );
    }

    let report = plan.generate(nothing).unwrap();

    assert_eq!(report.invoked, 3);
    assert_eq!(report.warnings.len(), 3);
    assert_eq!(*order.borrow(), vec!["foundation", "walls", "roof"]);
}

#[test]
fn test_generator_error_aborts_pass() {
    let order = log();
    let mut plan = HousePlan::new();

    let sink = order.clone();
    plan.add(
        Generator::new(Vec::<String>::new(), move |_| {
            sink.borrow_mut().push("first".to_string());
            Ok(())
        })
        .unwrap(),
        vec![],
    );
    plan.add(
        Generator::new(Vec::<String>::new(), |_| {
            Err(PlanError::Generator("rafter too short".to_string()))
        })
        .unwrap(),
        vec![],
    );
    let sink = order.clone();
    plan.add(
        Generator::new(Vec::<String>::new(), move |_| {
            sink.borrow_mut().push("third".to_string());
            Ok(())
        })
        .unwrap(),
        vec![],
    );

    let err = plan.generate(nothing).unwrap_err();

    assert_eq!(err, PlanError::Generator("rafter too short".to_string()));
    assert_eq!(*order.borrow(), vec!["first"]);
}

#[test]
fn test_helper_error_propagates_from_generator() {
    let mut plan = HousePlan::new();
    plan.add(
        Generator::new(["verticalSlice"], |args| {
            args.handler(0)?.call(&[Value::from(0.75)])?;
            Ok(())
        })
        .unwrap(),
        vec![],
    );

    let err = plan.generate(nothing).unwrap_err();
    assert!(matches!(err, PlanError::InvalidArgument(_)));
}

#[test]
fn test_silent_config_still_records_warnings() {
    let mut plan = HousePlan::new().with_config(GenerateConfig {
        log_unresolved: false,
    });
    plan.add(Generator::new(["shade", "insulation"], |_| Ok(())).unwrap(), vec![]);

    let report = plan.generate(nothing).unwrap();
    let names: Vec<&str> = report.warnings.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["shade", "insulation"]);
}

#[test]
fn test_warning_message() {
    let warning = UnresolvedCollaborator {
        generator: 2,
        name: "flooring".to_string(),
    };
    assert_eq!(
        warning.to_string(),
        "House plan needs a `flooring` handler but none was supplied"
    );
}

#[test]
fn test_resolve_out_of_range() {
    let plan = HousePlan::new();
    let err = plan.resolve_collaborators(0, &mut nothing).unwrap_err();
    assert!(matches!(err, PlanError::InvalidArgument(_)));
}

#[test]
fn test_empty_plan_generates_nothing() {
    let report = HousePlan::new().generate(nothing).unwrap();
    assert_eq!(report, GenerationReport::default());
}
