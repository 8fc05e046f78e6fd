use bagcat::{CatalogError, TopicInfo};
use proptest::prelude::*;
use std::cmp::Ordering;

fn topic_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("/[a-z]{1,6}(/[a-z_]{1,6}){0,2}").unwrap()
}

fn topic() -> impl Strategy<Value = TopicInfo> {
    (topic_name(), "[a-z_]{1,8}/[A-Z][a-zA-Z]{0,8}", "[0-9a-f]{32}", 0u32..10_000, 0u8..5).prop_map(
        |(name, type_name, md5, messages, connections)| {
            let mut topic = TopicInfo::new(name, type_name, md5);
            topic.add_to_message_count(i64::from(messages)).unwrap();
            for _ in 0..connections {
                topic.increment_connection_count();
            }
            topic
        },
    )
}

proptest! {
    #[test]
    fn prop_negative_delta_rejected_and_counter_unchanged(mut topic in topic(), delta in i64::MIN..0) {
        let before = topic.message_count();
        let result = topic.add_to_message_count(delta);
        prop_assert!(matches!(result, Err(CatalogError::InvalidArgument(_))));
        prop_assert_eq!(topic.message_count(), before);
    }

    #[test]
    fn prop_non_negative_delta_accumulates(mut topic in topic(), delta in 0i64..1_000_000) {
        let before = topic.message_count();
        topic.add_to_message_count(delta).unwrap();
        prop_assert_eq!(topic.message_count(), before + delta as u64);
    }

    #[test]
    fn prop_equality_iff_all_fields_equal(a in topic(), b in topic()) {
        let fields_equal = a.name() == b.name()
            && a.message_type() == b.message_type()
            && a.message_count() == b.message_count()
            && a.connection_count() == b.connection_count();
        prop_assert_eq!(a == b, fields_equal);
        prop_assert!(a == a.clone());
    }

    #[test]
    fn prop_name_order_is_equal_iff_names_equal(a in topic(), b in topic()) {
        prop_assert_eq!(a.cmp_by_name(&b) == Ordering::Equal, a.name() == b.name());
        prop_assert_eq!(a.cmp_by_name(&b), b.cmp_by_name(&a).reverse());
    }

    #[test]
    fn prop_same_name_different_counts_compare_equal_but_differ(
        name in topic_name(),
        extra in 1i64..100,
    ) {
        let a = TopicInfo::new(name.clone(), "std_msgs/String", "992ce8a1687cec8c8bd883ec73ca41d1");
        let mut b = a.clone();
        b.add_to_message_count(extra).unwrap();
        prop_assert_eq!(a.cmp_by_name(&b), Ordering::Equal);
        prop_assert_ne!(a, b);
    }
}
