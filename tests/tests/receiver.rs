use cypherx::{Record, Value};
use pretty_assertions::assert_eq;
use tests::*;

#[test]
fn receiver_interprets_strings() {
    init_logging();

    let post = Post::from_properties(&props! {
        "title" => "hello",
        "tags" => "rust, graphs",
    })
    .unwrap();

    assert_eq!(post.title, "hello");
    assert_eq!(post.tags, Tags(vec!["rust".to_string(), "graphs".to_string()]));
}

#[test]
fn receiver_interprets_lists() {
    let post = Post::from_properties(&props! {
        "tags" => vec![Value::from("a"), Value::from("b")],
    })
    .unwrap();

    assert_eq!(post.tags, Tags(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn receiver_errors_do_not_fail_the_scan() {
    init_logging();

    let post = Post::from_properties(&props! {
        "title" => "hello",
        "tags" => 5_i64,
    })
    .unwrap();
    assert_eq!(post.title, "hello");
    assert_eq!(post.tags, Tags::default());

    let mut post = Post {
        tags: Tags(vec!["kept".to_string()]),
        ..Post::default()
    };
    cypherx::scan_properties(
        &mut post,
        &props! {
            "tags" => vec![Value::from("a"), Value::Bool(true)],
            "score" => 1.5,
        },
    )
    .unwrap();
    assert_eq!(post.tags, Tags(vec!["kept".to_string()]));
    assert_eq!(post.score, Some(1.5));
}

#[test]
fn optional_scalar_receiver() {
    let post = Post::from_properties(&props! { "score" => 4.5 }).unwrap();
    assert_eq!(post.score, Some(4.5));

    let post = Post::from_properties(&props! { "score" => Value::Null }).unwrap();
    assert_eq!(post.score, None);

    let post = Post::from_properties(&props! { "score" => 4.5_f32 }).unwrap();
    assert_eq!(post.score, Some(4.5));

    let post = Post::from_properties(&props! { "score" => "not a number" }).unwrap();
    assert_eq!(post.score, None);
}
