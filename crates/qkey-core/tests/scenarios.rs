//! End-to-end key scenarios: a cache service writes keys with
//! `storage_key` and later reads/invalidates them with `matched_keys`.

use qkey_core::{
    matched_keys, rearrange_url, storage_key, KeySnapshot, LookupOptions, MergeStrategy, Params,
    RequestDescriptor,
};

fn write(store: &mut KeySnapshot<&'static str>, request: &RequestDescriptor, body: &'static str) {
    store.insert(storage_key(request, MergeStrategy::UrlWins), body);
}

#[test]
fn sorts_default_url_and_explicit_params() {
    let defaults = Params::from([("m", "T")]);
    let params = Params::from([("v", "T"), ("b", "T")]);
    assert_eq!(
        rearrange_url(
            "/posts?g=T&a=T&z=T&",
            Some(&defaults),
            Some(&params),
            MergeStrategy::UrlWins
        ),
        "/posts?a=T&b=T&g=T&m=T&v=T&z=T"
    );
}

#[test]
fn defaults_lose_to_url_and_params() {
    let defaults = Params::from([("a", "a"), ("b", "b"), ("f", "T")]);
    let params = Params::from([("b", "T")]);
    assert_eq!(
        rearrange_url("/posts?a=T", Some(&defaults), Some(&params), MergeStrategy::UrlWins),
        "/posts?a=T&b=T&f=T"
    );
}

#[test]
fn filler_values_vanish_from_every_source() {
    let defaults = Params::from([("v", "null")]);
    let params = Params::from([("g", "null"), ("i", "")]);
    assert_eq!(
        rearrange_url(
            r#"/posts?a=T&c=undefined&d=""&e=&f=T&"#,
            Some(&defaults),
            Some(&params),
            MergeStrategy::UrlWins
        ),
        "/posts?a=T&f=T"
    );
}

#[test]
fn second_spelling_of_same_request_reuses_the_stored_key() {
    let mut store = KeySnapshot::new();
    let first = RequestDescriptor::new("/posts?z=T&g=T").params(Params::from([("c", "T")]));
    write(&mut store, &first, "posts");

    let second = RequestDescriptor::new("/posts?m=null&z=T&k=&c=T&")
        .params(Params::from([("f", "undefined"), ("g", "T")]));
    write(&mut store, &second, "posts");

    assert_eq!(store.keys().collect::<Vec<_>>(), vec!["/posts?c=T&g=T&z=T"]);

    let lookup = LookupOptions::default().with_query_params(Params::from([
        ("f", "undefined"),
        ("g", "T"),
    ]));
    let found = matched_keys(
        store.keys(),
        "/posts?m=null&z=T&k=&c=T&",
        None,
        &lookup,
        MergeStrategy::UrlWins,
    );
    assert_eq!(found, vec!["/posts?c=T&g=T&z=T"]);
}

#[test]
fn invalidate_a_resource_group_by_identifier() {
    let mut store = KeySnapshot::new();
    write(&mut store, &RequestDescriptor::new("/posts?page=1").unique_identifier("feed"), "p1");
    write(&mut store, &RequestDescriptor::new("/users").unique_identifier("people"), "u");
    write(&mut store, &RequestDescriptor::new("/posts?page=2").unique_identifier("feed"), "p2");
    write(&mut store, &RequestDescriptor::new("/posts?page=3"), "anon");

    let found = matched_keys(
        store.keys(),
        "/posts",
        Some("feed"),
        &LookupOptions::default(),
        MergeStrategy::UrlWins,
    );
    assert_eq!(found, vec!["feed__/posts?page=1", "feed__/posts?page=2"]);

    let exact = matched_keys(
        store.keys(),
        "/posts?page=2",
        Some("feed"),
        &LookupOptions::exact(),
        MergeStrategy::UrlWins,
    );
    assert_eq!(exact, vec!["feed__/posts?page=2"]);
}

#[test]
fn overwrite_setting_changes_the_stored_key() {
    let request = RequestDescriptor::new("/posts?page-size=10")
        .params(Params::from([("page-size", "20")]));
    assert_eq!(storage_key(&request, MergeStrategy::UrlWins), "/posts?page-size=10");
    assert_eq!(storage_key(&request, MergeStrategy::ParamsWin), "/posts?page-size=20");
}
