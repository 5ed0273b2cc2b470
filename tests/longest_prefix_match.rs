use lpm_router::{route_parsing::load_routes, Ipv4Address, PrefixRouter, Route, Router};

fn ip(address: [u8; 4]) -> Ipv4Address {
    Ipv4Address::new(address)
}

fn campus() -> (PrefixRouter, Vec<Route>) {
    let routes = vec![
        Route::new(ip([192, 168, 0, 0]), 16, ip([1, 1, 1, 1])).unwrap(),
        Route::new(ip([192, 168, 0, 0]), 18, ip([2, 2, 2, 2])).unwrap(),
        Route::new(ip([192, 168, 64, 0]), 18, ip([3, 3, 3, 3])).unwrap(),
        Route::new(ip([192, 168, 128, 0]), 18, ip([4, 4, 4, 4])).unwrap(),
    ];
    (routes.iter().copied().collect(), routes)
}

#[test]
fn comprehensive() {
    let (mut router, routes) = campus();

    // 192.168.0.1 goes into the /18 not the /16
    assert_eq!(router.get(ip([192, 168, 0, 1])), Some(ip([2, 2, 2, 2])));
    // 192.168.127.255 goes to second block of /18
    assert_eq!(router.get(ip([192, 168, 127, 255])), Some(ip([3, 3, 3, 3])));
    // last subnet of /18 unrouted; goes to /16
    assert_eq!(router.get(ip([192, 168, 192, 1])), Some(ip([1, 1, 1, 1])));
    // unknown gets unrouted without default gateway
    assert_eq!(router.get(ip([10, 0, 0, 0])), None);

    router.add(Route::new(ip([0, 0, 0, 0]), 0, ip([9, 0, 0, 0])).unwrap());
    router.drop(&routes[1]);

    assert_eq!(router.get(ip([192, 168, 0, 1])), Some(ip([1, 1, 1, 1])));
    assert_eq!(router.get(ip([192, 168, 127, 255])), Some(ip([3, 3, 3, 3])));
    assert_eq!(router.get(ip([192, 168, 192, 1])), Some(ip([1, 1, 1, 1])));
    assert_eq!(router.get(ip([10, 0, 0, 0])), Some(ip([9, 0, 0, 0])));
}

#[test]
fn dropping_unknown_route_changes_nothing() {
    let (mut router, _) = campus();
    let before = router.tree().to_string();

    let unknown = Route::new(ip([10, 0, 0, 0]), 8, ip([1, 1, 1, 1])).unwrap();
    let unrouted = Route::new(ip([192, 168, 192, 0]), 18, ip([1, 1, 1, 1])).unwrap();
    router.drop(&unknown);
    router.drop(&unrouted);

    assert_eq!(router.tree().to_string(), before);
    assert_eq!(router.get(ip([192, 168, 0, 1])), Some(ip([2, 2, 2, 2])));
    assert_eq!(router.get(ip([192, 168, 192, 1])), Some(ip([1, 1, 1, 1])));
}

#[test]
fn bulk_drop_by_gateway() {
    let (mut router, _) = campus();
    let extra = Route::new(ip([192, 168, 200, 0]), 24, ip([2, 2, 2, 2])).unwrap();
    router.add(extra);

    assert_eq!(router.drop_all_to(ip([2, 2, 2, 2])), 2);
    assert_eq!(router.get(ip([192, 168, 0, 1])), Some(ip([1, 1, 1, 1])));
    assert_eq!(router.get(ip([192, 168, 200, 1])), Some(ip([1, 1, 1, 1])));
    assert_eq!(router.get(ip([192, 168, 64, 1])), Some(ip([3, 3, 3, 3])));
}

#[test]
fn route_file_matches_programmatic_table() -> anyhow::Result<()> {
    let loaded: PrefixRouter = load_routes("./tests/fixtures/routes.txt")?
        .into_iter()
        .collect();
    let (mut built, _) = campus();
    built.add(Route::default_route(ip([9, 0, 0, 0])));

    assert_eq!(loaded.tree().to_string(), built.tree().to_string());
    let addresses = [
        [192, 168, 0, 1],
        [192, 168, 127, 255],
        [192, 168, 192, 1],
        [10, 0, 0, 0],
    ];
    for address in addresses {
        assert_eq!(loaded.get(ip(address)), built.get(ip(address)));
    }
    Ok(())
}
