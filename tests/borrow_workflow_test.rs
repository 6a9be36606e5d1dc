use anyhow::Result;
use small_library::core::search::SearchField;
use small_library::{
    Catalog, InMemoryActionLog, ItemId, LibraryConfig, LibraryError, MemberId, SearchCriteria,
};

fn seeded_catalog() -> Result<Catalog<InMemoryActionLog>> {
    Ok(LibraryConfig::default().build_catalog(InMemoryActionLog::new())?)
}

/// Borrow, borrow again, return: the desk scenario from the front counter.
#[test]
fn test_gatsby_scenario() -> Result<()> {
    let mut catalog = seeded_catalog()?;

    let message = catalog.borrow(MemberId(101), ItemId(1))?;
    assert_eq!(message, "Shubham borrowed The Great Gatsby.");
    assert!(!catalog.item(ItemId(1)).unwrap().is_available());

    let err = catalog.borrow(MemberId(101), ItemId(1)).unwrap_err();
    assert!(matches!(err, LibraryError::ItemUnavailable { .. }));
    assert_eq!(err.user_friendly_message(), "The Great Gatsby is not available.");
    assert_eq!(
        catalog.member(MemberId(101)).unwrap().borrowed_items(),
        &[ItemId(1)]
    );

    let message = catalog.return_item(MemberId(101), ItemId(1))?;
    assert_eq!(message, "Shubham returned The Great Gatsby.");
    assert!(catalog.item(ItemId(1)).unwrap().is_available());

    let recorded: Vec<String> = catalog
        .recorder()
        .entries()
        .iter()
        .map(|entry| format!("{}: {}", entry.action, entry.message))
        .collect();
    assert_eq!(
        recorded,
        vec![
            "Borrow: Shubham borrowed The Great Gatsby.",
            "Borrow: The Great Gatsby is not available.",
            "Return: Shubham returned The Great Gatsby.",
        ]
    );
    Ok(())
}

#[test]
fn test_non_member_never_mutates_or_logs() -> Result<()> {
    let mut catalog = seeded_catalog()?;
    catalog.borrow(MemberId(102), ItemId(7))?;
    let items_before = catalog.items().to_vec();
    let members_before = catalog.members().to_vec();
    let entries_before = catalog.recorder().entries().len();

    for item_id in [1, 7, 99] {
        let err = catalog.borrow(MemberId(103), ItemId(item_id)).unwrap_err();
        assert_eq!(err.user_friendly_message(), "Action denied. Membership required.");
        let err = catalog.return_item(MemberId(104), ItemId(item_id)).unwrap_err();
        assert!(matches!(err, LibraryError::MembershipDenied { .. }));
    }

    assert_eq!(catalog.items(), items_before.as_slice());
    assert_eq!(catalog.members(), members_before.as_slice());
    assert_eq!(catalog.recorder().entries().len(), entries_before);
    Ok(())
}

#[test]
fn test_return_without_borrow_is_noop() -> Result<()> {
    let mut catalog = seeded_catalog()?;
    catalog.borrow(MemberId(101), ItemId(15))?;

    let err = catalog.return_item(MemberId(102), ItemId(15)).unwrap_err();
    assert_eq!(err.user_friendly_message(), "Naina did not borrow Harijan.");
    assert!(!catalog.item(ItemId(15)).unwrap().is_available());
    assert!(catalog.member(MemberId(102)).unwrap().borrowed_items().is_empty());

    let err = catalog.return_item(MemberId(102), ItemId(16)).unwrap_err();
    assert!(matches!(err, LibraryError::NotBorrowed { .. }));
    assert!(catalog.item(ItemId(16)).unwrap().is_available());
    Ok(())
}

/// Every available item can go out and come back, leaving the catalog as it was.
#[test]
fn test_round_trip_over_whole_catalog() -> Result<()> {
    let mut catalog = seeded_catalog()?;
    let items_before = catalog.items().to_vec();
    let members_before = catalog.members().to_vec();
    let ids: Vec<ItemId> = catalog.items().iter().map(|item| item.id).collect();

    for id in &ids {
        catalog.borrow(MemberId(102), *id)?;
        let holders = catalog
            .members()
            .iter()
            .filter(|member| member.has_borrowed(*id))
            .count();
        assert_eq!(holders, 1);
    }
    assert_eq!(catalog.available_count(), 0);
    assert_eq!(catalog.borrowed_items(MemberId(102))?.len(), ids.len());

    for id in &ids {
        catalog.return_item(MemberId(102), *id)?;
    }

    assert_eq!(catalog.items(), items_before.as_slice());
    assert_eq!(catalog.members(), members_before.as_slice());
    Ok(())
}

#[test]
fn test_unavailable_item_stays_with_first_borrower() -> Result<()> {
    let mut catalog = seeded_catalog()?;
    catalog.borrow(MemberId(101), ItemId(12))?;

    let err = catalog.borrow(MemberId(102), ItemId(12)).unwrap_err();
    assert!(matches!(err, LibraryError::ItemUnavailable { .. }));
    assert!(catalog.member(MemberId(101)).unwrap().has_borrowed(ItemId(12)));
    assert!(!catalog.member(MemberId(102)).unwrap().has_borrowed(ItemId(12)));
    Ok(())
}

#[test]
fn test_unknown_item_and_member() -> Result<()> {
    let mut catalog = seeded_catalog()?;

    let err = catalog.borrow(MemberId(101), ItemId(404)).unwrap_err();
    assert_eq!(err.user_friendly_message(), "Item not found.");

    let err = catalog.return_item(MemberId(999), ItemId(1)).unwrap_err();
    assert!(matches!(err, LibraryError::MemberNotFound { .. }));
    assert_eq!(catalog.recorder().entries().len(), 1);
    Ok(())
}

#[test]
fn test_search_by_author_kalam() -> Result<()> {
    let catalog = seeded_catalog()?;

    let criteria = SearchCriteria::from_pairs([("author", "kalam")])?;
    let ids: Vec<u32> = catalog.search(&criteria).iter().map(|item| item.id.0).collect();
    assert_eq!(ids, vec![7, 8, 9, 10]);
    Ok(())
}

#[test]
fn test_search_combines_fields_and_preserves_order() -> Result<()> {
    let catalog = seeded_catalog()?;

    let gandhi = SearchCriteria::new().with(SearchField::Author, "GANDHI");
    let titles: Vec<&str> = catalog
        .search(&gandhi)
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Harijan", "Young India"]);

    let narrowed = gandhi.with(SearchField::Title, "young");
    assert_eq!(catalog.search(&narrowed).len(), 1);

    let nothing = SearchCriteria::new().with(SearchField::Title, "Ulysses");
    assert!(catalog.search(&nothing).is_empty());

    assert!(matches!(
        SearchCriteria::from_pairs([("isbn", "978")]),
        Err(LibraryError::UnknownSearchField { .. })
    ));
    Ok(())
}
