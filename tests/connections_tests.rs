//! Connection listing and teardown against a mock node.

mod common;

use common::{addr, mock_client, url};
use raiden_client::{Connection, Context, Method, MockTransport};

const TOKEN: &str = "0x2a65Aca4D5fC5B5C859090a6c34d164135398226";

#[tokio::test]
async fn test_successfully_left_token_network() {
    let transport = MockTransport::new();
    transport.register(
        Method::Delete,
        url(&format!("connections/{TOKEN}")),
        204,
        r#"["0x41BCBC2fD72a731bcc136Cf6F7442e9C19e9f313","0x5A5f458F6c1a034930E45dC9a64B99d7def06D7E","0x8942c06FaA74cEBFf7d55B79F9989AdfC85C6b85"]"#,
    );

    let partners = mock_client(&transport)
        .connections()
        .leave(&Context::background(), addr(TOKEN))
        .await
        .unwrap();

    assert_eq!(
        partners,
        vec![
            addr("0x41BCBC2fD72a731bcc136Cf6F7442e9C19e9f313"),
            addr("0x5A5f458F6c1a034930E45dC9a64B99d7def06D7E"),
            addr("0x8942c06FaA74cEBFf7d55B79F9989AdfC85C6b85"),
        ]
    );
    assert_eq!(transport.requests()[0].body, None);
}

#[tokio::test]
async fn test_leave_unexpected_500_response() {
    let transport = MockTransport::new();
    transport.register(Method::Delete, url(&format!("connections/{TOKEN}")), 500, "");

    let err = mock_client(&transport)
        .connections()
        .leave(&Context::background(), addr(TOKEN))
        .await
        .unwrap_err();

    assert!(err.is_unexpected_eof());
}

#[tokio::test]
async fn test_leave_unable_to_make_request() {
    let transport = MockTransport::new();

    let err = mock_client(&transport)
        .connections()
        .leave(&Context::background(), addr(TOKEN))
        .await
        .unwrap_err();

    assert!(err
        .to_string()
        .starts_with(&format!("DELETE {}", url(&format!("connections/{TOKEN}")))));
}

#[tokio::test]
async fn test_leave_cancelled() {
    let transport = MockTransport::new();
    transport.register(Method::Delete, url(&format!("connections/{TOKEN}")), 200, "[]");

    let (ctx, handle) = Context::with_cancel();
    handle.cancel();

    let err = mock_client(&transport)
        .connections()
        .leave(&ctx, addr(TOKEN))
        .await
        .unwrap_err();

    assert!(matches!(
        err.transport_error(),
        Some(raiden_client::TransportError::Cancelled)
    ));
}

#[tokio::test]
async fn test_list_connections() {
    let other = "0x41BCBC2fD72a731bcc136Cf6F7442e9C19e9f313";
    let transport = MockTransport::new();
    transport.register(
        Method::Get,
        url("connections"),
        200,
        format!(
            r#"{{"{TOKEN}":{{"funds":100,"sum_deposits":67,"channels":3}},"{other}":{{"funds":0,"sum_deposits":0,"channels":0}}}}"#
        ),
    );

    let connections = mock_client(&transport)
        .connections()
        .list(&Context::background())
        .await
        .unwrap();

    assert_eq!(connections.len(), 2);
    assert_eq!(
        connections[&addr(TOKEN)],
        Connection {
            funds: 100,
            sum_deposits: 67,
            channels: 3
        }
    );
    assert_eq!(connections[&addr(other)].channels, 0);
}

#[tokio::test]
async fn test_node_address() {
    let transport = MockTransport::new();
    transport.register(
        Method::Get,
        url("address"),
        200,
        format!(r#"{{"our_address":"{TOKEN}"}}"#),
    );

    let address = mock_client(&transport)
        .node()
        .address(&Context::background())
        .await
        .unwrap();

    assert_eq!(address, addr(TOKEN));
}
