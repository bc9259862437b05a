mod common;

mod tests {
    use crate::common::{
        initialize_logging,
        mock_tezos_node::{
            BROKEN_BLOCK, GARBLED_BLOCK, MISSING_BLOCK, MockTezosNode, TENDERBAKE_BLOCK,
            tenderbake_baking_rights, tenderbake_endorsing_rights,
        },
        test_config,
    };
    use pretty_assertions::assert_eq;
    use tezos_rights_gateway::{
        errors::RpcError,
        rights::types::{BakingRight, BakingRightsParams, EndorsingRight, EndorsingRightsParams},
        tezos::{
            client::{BlockScope, ChainDataClient, Lookup},
            rpc::TezosRpc,
        },
    };

    fn baking_params() -> BakingRightsParams {
        BakingRightsParams {
            delegate: "tz1abc".to_string(),
            level: None,
            cycle: Some(vec![1, 2, 3]),
            max_priority: 5,
        }
    }

    fn endorsing_params() -> EndorsingRightsParams {
        EndorsingRightsParams {
            delegate: "tz1abc".to_string(),
            level: Some(vec![1_400_001]),
            cycle: None,
        }
    }

    fn rpc(node: &MockTezosNode) -> TezosRpc {
        TezosRpc::new(&test_config(&node.url).tezos_node).unwrap()
    }

    #[tokio::test]
    async fn test_baking_rights_found() {
        initialize_logging();
        let node = MockTezosNode::start().await;

        let rights = rpc(&node)
            .baking_rights(&baking_params(), &BlockScope::new("BLxyz"))
            .await
            .unwrap();

        assert_eq!(
            rights,
            Lookup::Found(vec![
                BakingRight {
                    level: 1_400_001,
                    delegate: "tz1abc".to_string(),
                    priority: Some(0),
                    estimated_time: Some("2021-04-01T12:00:00Z".to_string()),
                    ..Default::default()
                },
                BakingRight {
                    level: 1_400_007,
                    delegate: "tz1abc".to_string(),
                    priority: Some(2),
                    ..Default::default()
                },
            ])
        );
        assert_eq!(
            node.requests(),
            vec![
                "/chains/main/blocks/BLxyz/helpers/baking_rights?delegate=tz1abc&cycle=1&cycle=2&cycle=3&max_priority=5"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_endorsing_rights_found() {
        initialize_logging();
        let node = MockTezosNode::start().await;

        let rights = rpc(&node)
            .endorsing_rights(&endorsing_params(), &BlockScope::new("head"))
            .await
            .unwrap();

        assert_eq!(
            rights,
            Lookup::Found(vec![EndorsingRight {
                level: 1_400_001,
                delegate: Some("tz1abc".to_string()),
                slots: Some(vec![4, 19, 27]),
                ..Default::default()
            }])
        );
        assert_eq!(
            node.requests(),
            vec![
                "/chains/main/blocks/head/helpers/endorsing_rights?delegate=tz1abc&level=1400001"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_tenderbake_records_are_kept_verbatim() {
        initialize_logging();
        let node = MockTezosNode::start().await;
        let rpc = rpc(&node);
        let scope = BlockScope::new(TENDERBAKE_BLOCK);

        let baking = rpc
            .baking_rights(&baking_params(), &scope)
            .await
            .unwrap()
            .into_option()
            .unwrap();
        let endorsing = rpc
            .endorsing_rights(&endorsing_params(), &scope)
            .await
            .unwrap()
            .into_option()
            .unwrap();

        assert_eq!(baking[0].round, Some(0));
        assert_eq!(baking[0].priority, None);
        assert_eq!(endorsing[0].delegate, None);
        assert_eq!(serde_json::to_value(&baking).unwrap(), tenderbake_baking_rights());
        assert_eq!(
            serde_json::to_value(&endorsing).unwrap(),
            tenderbake_endorsing_rights()
        );
    }

    #[tokio::test]
    async fn test_404_is_not_found() {
        initialize_logging();
        let node = MockTezosNode::start().await;
        let rpc = rpc(&node);
        let scope = BlockScope::new(MISSING_BLOCK);

        let baking = rpc.baking_rights(&baking_params(), &scope).await;
        let endorsing = rpc.endorsing_rights(&endorsing_params(), &scope).await;

        assert_eq!(baking, Ok(Lookup::NotFound));
        assert_eq!(endorsing, Ok(Lookup::NotFound));
    }

    #[tokio::test]
    async fn test_server_error_is_reported_with_status() {
        initialize_logging();
        let node = MockTezosNode::start().await;

        let result = rpc(&node)
            .baking_rights(&baking_params(), &BlockScope::new(BROKEN_BLOCK))
            .await;

        assert_eq!(
            result,
            Err(RpcError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_unexpected_body_is_a_decode_error() {
        initialize_logging();
        let node = MockTezosNode::start().await;

        let result = rpc(&node)
            .endorsing_rights(&endorsing_params(), &BlockScope::new(GARBLED_BLOCK))
            .await;

        assert!(matches!(result, Err(RpcError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_node_is_an_http_error() {
        initialize_logging();
        let node = MockTezosNode::unreachable();

        let result = rpc(&node)
            .baking_rights(&baking_params(), &BlockScope::new("head"))
            .await;

        assert!(matches!(result, Err(RpcError::Http(_))));
    }
}
