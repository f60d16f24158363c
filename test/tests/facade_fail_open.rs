use std::sync::Arc;

use log::Level;
use stamina_client::{ClientFacade, ClientRequestProxy};
use stamina_server::{PlayerResolver, ServerAuthority, ServerFacade, UserKey};
use stamina_shared::{
    stamina_protocol, PacketChannel, ProcessRole, StaminaFacade, UNKNOWN_STAMINA,
};
use stamina_test::{
    unique_name, LogCapture, MockCapability, TestHostBuilder, TestPlayer, SERVER_ADDR,
};

const PLAYER: TestPlayer = 3;

fn server_facade(builder: TestHostBuilder) -> ServerFacade<TestPlayer> {
    let resolver = builder.build().resolver();
    let players: Arc<dyn PlayerResolver<TestPlayer>> =
        Arc::new(|_: &UserKey| Some(PLAYER));
    ServerFacade::new(Arc::new(ServerAuthority::new(resolver, players)), "stamina_bridge")
}

fn client_facade(builder: TestHostBuilder) -> ClientFacade<TestPlayer> {
    let resolver = builder.build().resolver();
    let mut protocol = stamina_protocol();
    protocol.lock();
    let (sender, _receiver) = PacketChannel::unbounded();
    let proxy = ClientRequestProxy::new(
        resolver,
        Arc::new(protocol),
        sender,
        SERVER_ADDR.parse().unwrap(),
    );
    ClientFacade::new(Arc::new(proxy), "stamina_bridge")
}

fn facades(builder: impl Fn() -> TestHostBuilder) -> Vec<Box<dyn StaminaFacade<TestPlayer>>> {
    vec![
        Box::new(server_facade(builder())),
        Box::new(client_facade(builder())),
    ]
}

fn assert_fail_open(facade: &dyn StaminaFacade<TestPlayer>) {
    let role = facade.role();
    for amount in [-5.0, 0.0, 5.0, 1000.0] {
        assert!(facade.consume_stamina(&PLAYER, amount), "{} consume {}", role, amount);
    }
    assert!(facade.start_drain(&PLAYER, "sprint", 10.0), "{} start_drain", role);
    facade.stop_drain(&PLAYER, "sprint");
    assert!(facade.drain(&PLAYER, 10.0, 0.016), "{} drain", role);
    assert!(facade.can_perform_action(&PLAYER), "{} can_perform_action", role);
    assert_eq!(facade.current_stamina(&PLAYER), UNKNOWN_STAMINA, "{} current", role);
    assert_eq!(facade.max_stamina(&PLAYER), UNKNOWN_STAMINA, "{} max", role);
    assert!(!facade.is_exhausted(&PLAYER), "{} is_exhausted", role);
}

#[test]
fn test_disabled_subsystem_allows_everything() {
    for facade in facades(|| TestHostBuilder::new().disabled()) {
        assert_fail_open(facade.as_ref());
    }
}

#[test]
fn test_missing_subsystem_allows_everything() {
    for facade in facades(|| TestHostBuilder::new().unregistered()) {
        assert_fail_open(facade.as_ref());
    }
}

#[test]
fn test_failing_capability_allows_everything() {
    let logs = LogCapture::install();
    let detail = unique_name("stamina table corrupt");
    let capability = Arc::new(MockCapability::new().failing(&detail));

    let server = server_facade(TestHostBuilder::new().bind(ProcessRole::Server, capability.clone()));
    let client = client_facade(TestHostBuilder::new().bind(ProcessRole::Client, capability.clone()));

    assert_fail_open(&server);
    assert_fail_open(&client);

    // server: 4 consumes, start, stop, drain, 4 queries. client: 4 queries.
    assert_eq!(logs.count(Level::Error, &detail), 15);
    assert_eq!(capability.calls().len(), 15);
}

#[test]
fn test_panicking_capability_allows_everything() {
    let logs = LogCapture::install();
    let detail = unique_name("stamina subsystem exploded");
    let capability = Arc::new(MockCapability::new().panicking(&detail));

    let server = server_facade(TestHostBuilder::new().bind(ProcessRole::Server, capability.clone()));

    assert_fail_open(&server);

    let errors = logs
        .records_containing(&detail)
        .into_iter()
        .filter(|record| record.level == Level::Error)
        .collect::<Vec<_>>();
    assert_eq!(errors.len(), 11);
    assert!(errors.iter().all(|record| record.message.contains("panicked")));
}

#[test]
fn test_present_capability_answers_queries() {
    let capability = Arc::new(MockCapability::new().with_stamina(0.0, 100.0));

    let server = server_facade(TestHostBuilder::new().bind(ProcessRole::Server, capability.clone()));
    let client = client_facade(TestHostBuilder::new().bind(ProcessRole::Client, capability.clone()));

    let facades: [&dyn StaminaFacade<TestPlayer>; 2] = [&server, &client];
    for facade in facades {
        assert_eq!(facade.current_stamina(&PLAYER), 0.0);
        assert_eq!(facade.max_stamina(&PLAYER), 100.0);
        assert!(facade.is_exhausted(&PLAYER));
        assert!(!facade.can_perform_action(&PLAYER));
    }
}
