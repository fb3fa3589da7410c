//! Integration tests for endpoint resolution.

mod integration_tests {
    use abiscan_resolver::{
        get_etherscan_endpoints, EndpointResolver, Error, EtherscanUrls, ResolverOptions,
        RpcTransport, ETHERSCAN_ENDPOINTS,
    };
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Answers every request with a fixed `eth_chainId` result and counts the calls.
    struct MockTransport {
        chain_id: String,
        calls: AtomicUsize,
    }

    impl MockTransport {
        fn new(chain_id: &str) -> Self {
            Self { chain_id: chain_id.to_string(), calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RpcTransport for MockTransport {
        async fn send(&self, method: &str, params: Value) -> Result<Value, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(method, "eth_chainId");
            assert_eq!(params, Value::Array(vec![]));
            Ok(Value::String(self.chain_id.clone()))
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl RpcTransport for FailingTransport {
        async fn send(&self, _method: &str, _params: Value) -> Result<Value, Error> {
            Err(Error::RpcError("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_resolve_mainnet() {
        init_tracing();
        let transport = MockTransport::new("0x1");

        let urls = get_etherscan_endpoints(&transport, "mainnet").await.expect("failed to resolve");

        assert_eq!(
            urls,
            EtherscanUrls {
                api_url: "https://api.etherscan.io/api",
                browser_url: "https://etherscan.io/",
            }
        );
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_resolve_every_supported_chain() {
        init_tracing();
        for (chain_id, expected) in ETHERSCAN_ENDPOINTS.iter() {
            let transport = MockTransport::new(&format!("{chain_id:#x}"));
            let urls =
                get_etherscan_endpoints(&transport, "network").await.expect("failed to resolve");
            assert_eq!(urls, expected, "chain id {chain_id}");
        }
    }

    #[tokio::test]
    async fn test_resolve_unprefixed_response() {
        let transport = MockTransport::new("a4b1");
        let urls = get_etherscan_endpoints(&transport, "arbitrum").await.expect("failed to resolve");
        assert_eq!(urls.api_url, "https://api.arbiscan.io/api");
        assert_eq!(urls.browser_url, "https://arbiscan.io");
    }

    #[tokio::test]
    async fn test_resolve_unsupported_network() {
        init_tracing();
        let transport = MockTransport::new("0x539");

        let err = get_etherscan_endpoints(&transport, "localhost")
            .await
            .expect_err("chain 1337 has no explorer");

        assert!(matches!(
            err,
            Error::UnsupportedNetwork { chain_id: 1337, ref network_name } if network_name == "localhost"
        ));
        let message = err.to_string();
        assert!(message.contains("1337"));
        assert!(message.contains("localhost"));
        assert_eq!(err.kind(), "UnsupportedNetwork");
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let transport = MockTransport::new("0x38");
        let resolver = EndpointResolver::default();

        let first = resolver.resolve(&transport, "bsc").await.expect("failed to resolve");
        let second = resolver.resolve(&transport, "bsc").await.expect("failed to resolve");

        assert_eq!(first, second);
        assert_eq!(first.api_url, "https://api.bscscan.com/api");
        assert_eq!(transport.calls(), 2);
        assert_eq!(ETHERSCAN_ENDPOINTS.len(), 8);
    }

    #[tokio::test]
    async fn test_local_network_allowed_by_default() {
        let transport = MockTransport::new("0x1");
        let urls = get_etherscan_endpoints(&transport, "hardhat").await.expect("failed to resolve");
        assert_eq!(urls.api_url, "https://api.etherscan.io/api");
    }

    #[tokio::test]
    async fn test_local_network_rejected_when_enabled() {
        let transport = MockTransport::new("0x1");
        let resolver = EndpointResolver::new(ResolverOptions {
            reject_local_network: true,
            ..ResolverOptions::default()
        });

        let err = resolver.resolve(&transport, "hardhat").await.expect_err("local network");
        assert!(matches!(err, Error::LocalNetwork { .. }));
        assert_eq!(transport.calls(), 0);

        let urls = resolver.resolve(&transport, "mainnet").await.expect("failed to resolve");
        assert_eq!(urls.browser_url, "https://etherscan.io/");
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let err = get_etherscan_endpoints(&FailingTransport, "mainnet")
            .await
            .expect_err("transport fails");
        assert!(matches!(err, Error::RpcError(_)));
    }

    #[tokio::test]
    async fn test_concurrent_resolution_through_shared_transport() {
        let transport: Arc<dyn RpcTransport> = Arc::new(MockTransport::new("0x5"));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let transport = Arc::clone(&transport);
                tokio::spawn(async move { get_etherscan_endpoints(&transport, "goerli").await })
            })
            .collect();

        for handle in handles {
            let urls = handle.await.expect("task panicked").expect("failed to resolve");
            assert_eq!(urls.api_url, "https://api-goerli.etherscan.io/api");
        }
    }
}
