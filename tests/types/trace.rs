use causeway::{
    wrap, wrapf, ContextValue, ErrorVec, Failure, FrameKind, NamedErrorRegistry, OpaqueError,
    RemoteNode, SourceLocation, Trace, MAX_FRAME_COUNT,
};
use std::io;

fn foo_err() -> Failure {
    Failure::from(io::Error::new(io::ErrorKind::Other, "foo"))
}

fn remote(host: &str, file: &str, line: u32, values: &[(&str, &str)], dropped_info: bool) -> RemoteNode {
    RemoteNode {
        location: SourceLocation { host: Some(host.to_string()), file: file.to_string(), line },
        values: values.iter().map(|(k, v)| ContextValue::new(*k, *v)).collect::<ErrorVec<_>>(),
        depth: 1,
        dropped_info,
    }
}

#[test]
fn frames_are_most_recent_first() {
    let err = wrap!(foo_err(), "msg", "initial error");
    let err = wrap!(err, "id", 5);
    let err = wrapf!(err, "another {}", "error");

    let trace = err.trace();
    let chain: Vec<_> = trace.iter().filter(|f| f.is_chain()).collect();

    assert_eq!(chain.len(), 3);
    assert_eq!(chain[0].lookup_value("msg"), Some("another error"));
    assert_eq!(chain[1].lookup_value("id"), Some("5"));
    assert_eq!(chain[2].lookup_value("msg"), Some("initial error"));
    assert_eq!(chain.iter().map(|f| f.depth).collect::<Vec<_>>(), vec![3, 2, 1]);

    // the wrapped foreign error closes the walk
    let last = trace.frames().last().unwrap();
    assert_eq!(last.kind, FrameKind::Foreign);
    assert_eq!(last.lookup_value("msg"), Some("foo"));
    assert!(last.location.is_none());
    assert_eq!(trace.len(), 4);

    let text = trace.to_string();
    assert!(text.contains("\"msg\" = \"initial error\""));
    assert!(text.contains("\"id\" = \"5\""));
    let another = text.find("another error").unwrap();
    let initial = text.find("initial error").unwrap();
    assert!(another < initial);
}

#[test]
fn chain_rooted_in_new_has_no_foreign_frame() {
    let err = wrap!(Failure::new("boom"), "context");
    let trace = err.trace();

    assert_eq!(trace.len(), 2);
    assert!(trace.iter().all(|f| f.is_chain()));
    assert_eq!(trace.frames()[1].lookup_value("msg"), Some("boom"));
}

#[test]
fn frame_records_construction_site() {
    let line = line!() + 1;
    let err = Failure::new("boom").wrap(["here"]);

    let location = err.trace().frames()[0].location.clone().unwrap();
    assert_eq!(location.line, line);
    assert!(location.file.ends_with("trace.rs"));
}

#[test]
fn local_frames_carry_operating_system_host_name() {
    let err = Failure::new("boom");
    let location = err.trace().frames()[0].location.clone().unwrap();

    let host = gethostname::gethostname();
    let host = host.to_string_lossy().trim().to_string();
    if host.is_empty() {
        assert!(location.host.is_none());
    } else {
        assert_eq!(location.host.as_deref(), Some(host.as_str()));
        assert!(location.to_string().starts_with(&format!("{host}:")));
    }
}

#[test]
fn renders_location_context_and_terminal() {
    let node = remote("db-1", "store.rs", 42, &[("msg", "write failed"), ("table", "users")], false);
    let err = Failure::rebuild(node, Some(foo_err()));

    let expected = "db-1:store.rs:42\n\
                    Where:\n  \"msg\" = \"write failed\"\n  \"table\" = \"users\"\n\
                    ???:???:???\n\
                    Where:\n  \"msg\" = \"foo\"\n";
    assert_eq!(err.trace().to_string(), expected);
}

#[test]
fn renders_dropped_info_marker() {
    let node = remote("db-1", "store.rs", 42, &[("msg", "write failed")], true);
    let err = Failure::rebuild(node, None);

    let expected = "db-1:store.rs:42\n\
                    Where:\n  \"msg\" = \"write failed\"\n\
                    ... dropped info (depth cap reached) ...\n";
    assert_eq!(err.trace().to_string(), expected);
}

#[test]
fn unknown_host_renders_placeholder() {
    let location = SourceLocation { host: None, file: "lib.rs".into(), line: 3 };
    assert_eq!(location.to_string(), "???:lib.rs:3");
}

#[test]
fn pruned_chain_marks_outer_frame() {
    let mut err = foo_err();
    for _ in 0..201 {
        err = err.wrap(["again"]);
    }

    let trace = err.trace();
    assert!(trace.frames()[0].dropped_info);
    assert!(!trace.frames()[1].dropped_info);
    assert!(trace.to_string().contains("... dropped info (depth cap reached) ..."));
}

#[test]
fn walk_stops_at_frame_cap() {
    let mut err = foo_err();
    for _ in 0..210 {
        err = err.wrap(["again"]);
    }

    let trace = err.trace();
    assert!(trace.is_truncated());
    assert_eq!(trace.len(), MAX_FRAME_COUNT);
    assert!(trace.iter().all(|f| f.is_chain()));

    let root = trace.root().unwrap();
    assert_eq!(root.kind, FrameKind::Foreign);
    assert_eq!(root.lookup_value("msg"), Some("foo"));
    assert!(trace
        .to_string()
        .ends_with("... trace truncated ...\n???:???:???\nWhere:\n  \"msg\" = \"foo\"\n"));
}

#[test]
fn full_chain_below_cap_fits() {
    let mut err = foo_err();
    for _ in 0..199 {
        err = err.wrap(["again"]);
    }

    let trace = err.trace();
    assert!(!trace.is_truncated());
    assert_eq!(trace.len(), 200);
    assert_eq!(trace.frames()[199].kind, FrameKind::Foreign);
    assert!(trace.root().is_none());
}

fn wrapped_times(times: usize) -> Failure {
    let mut err = foo_err();
    for _ in 0..times {
        err = err.wrap(["again"]);
    }
    err
}

#[test]
fn rematerialized_truncated_chain_keeps_root_at_cap() {
    let err = wrapped_times(200);
    let trace = err.trace();
    assert!(trace.is_truncated());

    let rebuilt = trace.rematerialize(&NamedErrorRegistry::new()).unwrap();

    assert_eq!(err.to_string(), "again: foo");
    assert_eq!(rebuilt.to_string(), err.to_string());
    assert_eq!(rebuilt.root_cause().to_string(), "foo");
    assert!(rebuilt.root_cause().downcast_ref::<OpaqueError>().is_some());
    assert_eq!(rebuilt.trace(), trace);
}

#[test]
fn rematerialized_pruned_chain_keeps_root() {
    let err = wrapped_times(210);
    let trace = err.trace();
    assert!(trace.is_truncated());

    let rebuilt = trace.rematerialize(&NamedErrorRegistry::new()).unwrap();

    assert_eq!(rebuilt.to_string(), "again: foo");
    assert!(rebuilt.dropped_info());
    assert_eq!(rebuilt.depth(), 210);
    assert_eq!(rebuilt.trace().to_string(), trace.to_string());
}

#[test]
fn truncated_chain_rooted_in_new_keeps_root_node() {
    let mut err = Failure::new("disk gone");
    for _ in 0..250 {
        err = err.wrap(["retrying"]);
    }

    let trace = err.trace();
    let root = trace.root().unwrap();
    assert!(root.is_chain());
    assert_eq!(root.depth, 0);

    let rebuilt = trace.rematerialize(&NamedErrorRegistry::new()).unwrap();
    assert_eq!(rebuilt.to_string(), "retrying: disk gone");
    assert_eq!(rebuilt.root_cause().depth(), 0);
}

#[test]
fn rendering_is_deterministic() {
    let err = wrap!(wrap!(foo_err(), "a", "1"), "b", "2");

    assert_eq!(err.trace().to_string(), err.trace().to_string());
    assert_eq!(err.trace(), err.trace());
}

#[test]
fn rematerialized_chain_renders_identically() {
    let err = wrap!(foo_err(), "msg", "initial error");
    let err = wrap!(err, "id", 5);
    let err = wrapf!(err, "another {}", "error");
    let trace = err.trace();

    let rebuilt = trace.rematerialize(&NamedErrorRegistry::new()).unwrap();

    assert_eq!(rebuilt.to_string(), err.to_string());
    assert_eq!(rebuilt.trace(), trace);
    assert_eq!(rebuilt.trace().to_string(), trace.to_string());
    assert!(rebuilt.as_chain().unwrap().was_deserialized());
    assert_eq!(rebuilt.depth(), 3);
    assert!(rebuilt.root_cause().downcast_ref::<OpaqueError>().is_some());
}

#[test]
fn rematerialized_chain_rooted_in_new() {
    let err = wrap!(Failure::new("boom"), "context");
    let rebuilt = err.trace().rematerialize(&NamedErrorRegistry::new()).unwrap();

    assert_eq!(rebuilt.to_string(), "context: boom");
    assert_eq!(rebuilt.root_cause().to_string(), "boom");
}

#[test]
fn rematerialize_restores_named_identity() {
    let mut registry = NamedErrorRegistry::new();
    let denied = registry.register("permission denied", 0x4f1c_0e22_9d3b_a170_u64);

    let err = wrap!(denied.clone(), "opening file", "path", "/etc/shadow");
    let rebuilt = err.trace().rematerialize(&registry).unwrap();

    let root = rebuilt.root_cause().as_named().unwrap();
    assert!(root.ptr_eq(&denied));
    assert_eq!(rebuilt.to_string(), "opening file: permission denied");
}

#[test]
fn empty_trace_rematerializes_to_nothing() {
    let trace = Trace::default();

    assert!(trace.is_empty());
    assert!(trace.rematerialize(&NamedErrorRegistry::new()).is_none());
    assert_eq!(trace.to_string(), "");
}
