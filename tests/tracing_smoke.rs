//! Exercises the crate with a real `tracing` subscriber installed, the way the workspace's other
//! crates set one up for their own test binaries (e.g. `nova-cache`'s `shard_index` suite installs
//! a `tracing_subscriber::fmt` subscriber around the call under test). `format`/`format_tokens` are
//! `#[tracing::instrument]`ed and emit `trace!` events on every group-open and break decision
//! (`crate::printer`); this confirms that instrumentation never panics or deadlocks with an active
//! subscriber, independent of whatever a caller's own logging setup looks like.

use bracefmt::ast::{Decl, Document, InitializerDecl, Leaf, Member, Param, ParamList, StructDecl};
use bracefmt::config::Config;
use tracing::Level;

fn three_param_struct() -> Document {
    Document {
        decls: vec![Decl::Struct(StructDecl {
            attributes: vec![],
            keyword: Leaf::new("struct"),
            name: Leaf::new("S"),
            generics: None,
            conformance: None,
            left_brace: Leaf::new("{"),
            members: vec![Member::Initializer(InitializerDecl {
                attributes: vec![],
                keyword: Leaf::new("init"),
                params: ParamList {
                    left_paren: Leaf::new("("),
                    params: vec![
                        Param { name: Leaf::new("a"), colon: Leaf::new(":"), type_name: Leaf::new("Int") },
                        Param { name: Leaf::new("b"), colon: Leaf::new(":"), type_name: Leaf::new("Int") },
                        Param { name: Leaf::new("c"), colon: Leaf::new(":"), type_name: Leaf::new("Int") },
                    ],
                    right_paren: Leaf::new(")"),
                },
                body: bracefmt::ast::Body {
                    left_brace: Leaf::new("{"),
                    statements: vec![],
                    right_brace: Leaf::new("}"),
                },
            })],
            right_brace: Leaf::new("}"),
        })],
    }
}

#[test]
fn formatting_under_an_active_trace_subscriber_does_not_panic() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut doc = three_param_struct();
        let config = Config::builder().max_line_length(20).try_build().unwrap();
        let out = bracefmt::format(&mut doc, &config).expect("balanced token stream");
        assert!(out.contains("init("));
    });
}
