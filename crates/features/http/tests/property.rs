use hdesign_domain::service::{EndpointExpr, ServiceExpr};
use hdesign_http::{RootExpr, extract_wildcards, wildcards};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = (Option<char>, String)> {
    (prop_oneof![Just(None), Just(Some(':')), Just(Some('*'))], "[a-zA-Z0-9_]{1,8}")
}

proptest! {
    #[test]
    fn extraction_is_idempotent(path in "[/:*a-zA-Z0-9_.-]{0,64}") {
        let first = extract_wildcards(&path);
        let second = extract_wildcards(&path);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn declared_wildcards_come_back_in_order(segments in proptest::collection::vec(segment(), 0..8)) {
        let mut path = String::new();
        let mut expected = Vec::new();
        for (delimiter, name) in &segments {
            path.push('/');
            if let Some(d) = delimiter {
                path.push(*d);
                expected.push(name.clone());
            }
            path.push_str(name);
        }

        prop_assert_eq!(extract_wildcards(&path), expected);
    }

    #[test]
    fn names_match_between_extractors(path in "[/:*a-z_]{0,48}") {
        let names: Vec<String> = wildcards(&path).into_iter().map(|w| w.name).collect();
        prop_assert_eq!(names, extract_wildcards(&path));
    }

    #[test]
    fn one_resource_per_service_name(
        names in proptest::collection::vec("[a-d]", 1..16),
        endpoints in 0usize..5,
    ) {
        let mut root = RootExpr::new();
        let mut distinct: Vec<&str> = Vec::new();

        for name in &names {
            let svc = (0..endpoints)
                .fold(ServiceExpr::new(name.as_str()), |svc, i| svc.endpoint(EndpointExpr::new(format!("e{i}"))))
                .shared();
            let resource = root.resource_for(&svc);
            prop_assert_eq!(resource.name(), name.as_str());
            prop_assert_eq!(resource.actions().len(), endpoints);
            if !distinct.contains(&name.as_str()) {
                distinct.push(name.as_str());
            }
        }

        let created: Vec<&str> = root.resources().iter().map(|r| r.name()).collect();
        prop_assert_eq!(created, distinct);
    }
}
