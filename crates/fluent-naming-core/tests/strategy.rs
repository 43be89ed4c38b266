use fluent_naming_core::prelude::*;

const TABLE_PREFIX: &str = "fluent_";

fn options() -> StrategyOptionsBuilder {
    StrategyOptions::builder()
        .table_prefix(TABLE_PREFIX)
        .dont_restrict_length()
}

fn strategy(options: StrategyOptionsBuilder) -> NamingStrategy {
    NamingStrategy::new(options.build().expect("options should build"))
}

#[test]
fn foreign_key_column_name() {
    let naming = strategy(options());
    assert_eq!(
        naming.foreign_key_column_name(Some("propertyName"), "propertyTableName"),
        "fk_property_name"
    );
    assert_eq!(
        naming.foreign_key_column_name(None, "propertyTableName"),
        "fk_property_table_name"
    );
    assert_eq!(
        naming.foreign_key_column_name(Some(""), "propertyTableName"),
        "fk_property_table_name"
    );

    let naming = strategy(options().no_foreign_key_column_prefix());
    assert_eq!(
        naming.foreign_key_column_name(Some("propertyName"), "propertyTableName"),
        "property_name"
    );
    assert_eq!(
        naming.foreign_key_column_name(None, "propertyTableName"),
        "property_table_name"
    );
}

#[test]
fn property_to_column_name() {
    let naming = strategy(options());
    assert_eq!(naming.property_to_column_name("field"), "f_field");
    assert_eq!(naming.property_to_column_name("camelCaseField"), "f_camel_case_field");
    assert_eq!(naming.property_to_column_name("camelCF"), "f_camel_cf");

    let naming = strategy(options().no_column_prefix());
    assert_eq!(naming.property_to_column_name("camelCaseField"), "camel_case_field");
}

#[test]
fn class_to_table_name() {
    let cases = [
        ("Class", "classes"),
        ("Classes", "classes"),
        ("Key", "keys"),
        ("Query", "queries"),
        ("Answer", "answers"),
        ("Prefix", "prefixes"),
        ("CamelCaseClassName", "camel_case_class_names"),
        ("User", "users"),
        ("Face", "faces"),
        ("Cliff", "cliffs"),
        ("Safe", "safes"),
        ("Book", "books"),
        ("Table", "tables"),
        ("Dish", "dishes"),
        ("Match", "matches"),
        ("Diagnosis", "diagnoses"),
        ("Axis", "axes"),
    ];

    let naming = strategy(options());
    for (class_name, table) in cases {
        assert_eq!(
            naming.class_to_table_name(class_name),
            format!("{TABLE_PREFIX}{table}"),
            "class {class_name}"
        );
    }

    let naming = strategy(options().no_table_prefix());
    assert_eq!(
        naming.class_to_table_name("CamelCaseClassName"),
        "camel_case_class_names"
    );
}

#[test]
fn join_key_column_name() {
    let naming = strategy(options());
    assert_eq!(
        naming.join_key_column_name("joinedColumn", "joinedTable"),
        "joined_column_id"
    );
}

#[test]
fn join_table_name() {
    let naming = strategy(options());
    assert_eq!(
        naming.join_table_name("ownerEntity", "associatedEntity"),
        "fluent_owner_entities_associated_entities"
    );
    assert_eq!(
        naming.join_table_name_for_property("Customer", "Customer", "blockedBy"),
        "fluent_customers_customers_blocked_by"
    );

    let naming = strategy(options().no_table_prefix());
    assert_eq!(
        naming.join_table_name("ownerEntity", "associatedEntity"),
        "owner_entities_associated_entities"
    );
}

#[test]
fn embedded_property_to_column_name() {
    let dont_touch_prefix = false;

    let naming = strategy(options().max_length(13));
    assert_eq!(
        naming.embedded_property_to_column_name("prefix", "property", dont_touch_prefix),
        "f_prfx_prprty"
    );

    let naming = strategy(options().max_length(15));
    assert_eq!(
        naming.embedded_property_to_column_name("prefix", "property", dont_touch_prefix),
        "f_prfx_property"
    );

    let naming = strategy(options().max_length(13).no_column_prefix());
    assert_eq!(
        naming.embedded_property_to_column_name("prefix", "property", dont_touch_prefix),
        "prfx_property"
    );
}

#[test]
fn embedded_property_to_column_name_dont_touch_prefix() {
    let dont_touch_prefix = true;

    let naming = strategy(options().max_length(15));
    assert_eq!(
        naming.embedded_property_to_column_name("prefix", "property", dont_touch_prefix),
        "f_prefix_prprty"
    );

    let naming = strategy(options().max_length(13).no_column_prefix());
    assert_eq!(
        naming.embedded_property_to_column_name("prefix", "property", dont_touch_prefix),
        "prefix_prprty"
    );
}

#[test]
fn embedded_property_without_limit_is_joined() {
    let naming = strategy(options());
    assert_eq!(
        naming.embedded_property_to_column_name("homeAddress", "streetName", false),
        "f_home_address_street_name"
    );
}

#[test]
fn foreign_key_constraint_name() {
    let naming = strategy(options());
    assert_eq!(
        naming.foreign_key_name("some_table", "some_field"),
        "fk_some_table_some_field"
    );

    let naming = strategy(options().no_foreign_key_constraint_prefix());
    assert_eq!(
        naming.foreign_key_name("some_table", "some_field"),
        "some_table_some_field"
    );
}

#[test]
fn unique_key_constraint_name() {
    let naming = strategy(options());
    assert_eq!(
        naming.unique_key_name("some_table", "some_field"),
        "uk_some_table_some_field"
    );

    let naming = strategy(options().no_unique_key_constraint_prefix());
    assert_eq!(
        naming.unique_key_name("some_table", "some_field"),
        "some_table_some_field"
    );
}

#[test]
fn default_cap_applies_to_long_names() {
    let naming = NamingStrategy::default();
    let column = naming.property_to_column_name("customerBillingAddressLineNumber");

    assert!(column.chars().count() <= 30, "{column}");
    assert!(column.starts_with("f_"));
}

#[test]
fn unique_join_table_names_for_self_associations() {
    let naming = strategy(options().no_table_prefix());
    let registry = JoinTableNames::new();

    let friends = naming.unique_join_table_name(&registry, "Customer", "Customer", Some("friends"));
    let blocked = naming.unique_join_table_name(&registry, "Customer", "Customer", Some("blocked"));

    assert_eq!(friends, "customers_customers");
    assert_eq!(blocked, "customers_customers_blocked");
    assert_eq!(
        naming.unique_join_table_name(&registry, "Customer", "Customer", Some("blocked")),
        blocked
    );
}

#[test]
fn disambiguated_join_tables_stay_distinct_under_default_cap() {
    let naming = NamingStrategy::default();
    let registry = JoinTableNames::new();
    let entity = "CustomerAccountHistory";

    let names: Vec<String> = ["friends", "followers", "following"]
        .into_iter()
        .map(|property| naming.unique_join_table_name(&registry, entity, entity, Some(property)))
        .collect();

    assert_eq!(names[0], "cstmr_accnt_hstrs_cstmr_accnt");
    assert_eq!(names[1], "cstmr_accnt_hstrs_cs_followers");
    assert_eq!(names[2], "cstmr_accnt_hstrs_cs_following");
    for name in &names {
        assert!(name.chars().count() <= 30, "{name}");
    }
    assert_eq!(registry.len(), 3);
}

#[test]
fn association_without_property_gets_an_ordinal() {
    let naming = NamingStrategy::default();
    let registry = JoinTableNames::new();

    let items = naming.unique_join_table_name(&registry, "Customer", "Item", Some("items"));
    let unnamed = naming.unique_join_table_name(&registry, "Customer", "Item", None);

    assert_eq!(items, "customers_items");
    assert_eq!(unnamed, "customers_items_2");
    assert_eq!(
        naming.unique_join_table_name(&registry, "Customer", "Item", None),
        unnamed
    );
    assert_eq!(
        naming.unique_join_table_name(&registry, "Customer", "Item", Some("items")),
        items
    );
}

#[test]
fn concurrent_colliding_requests_get_distinct_names() {
    let naming = strategy(options().no_table_prefix());
    let registry = JoinTableNames::new();
    let properties = ["friends", "blocked", "followers", "muted"];

    let names: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = properties
            .iter()
            .map(|&property| {
                let naming = &naming;
                let registry = &registry;
                scope.spawn(move || {
                    naming.unique_join_table_name(registry, "Customer", "Customer", Some(property))
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("naming thread panicked"))
            .collect()
    });

    let unsuffixed = names
        .iter()
        .filter(|name| name.as_str() == "customers_customers")
        .count();
    assert_eq!(unsuffixed, 1, "{names:?}");

    let mut distinct = names.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), properties.len());
}
