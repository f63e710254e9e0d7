//! Integration tests for the REST client over an injected dispatcher.
//!
//! A recording dispatcher stands in for the network, so these tests check
//! exactly which requests the facades build.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use bigcommerce_api::clients::{HttpMethod, HttpRequest, HttpResponse};
use bigcommerce_api::{
    async_trait, HttpError, InventoryReader, RequestDispatcher, ResourceError, RestClient,
    RestError, Shipment, ShipmentItem, ShipmentManager,
};

#[derive(Default)]
struct RecordingDispatcher {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<HttpResponse>>,
}

impl RecordingDispatcher {
    fn replying(responses: Vec<(u16, &str)>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(
                responses
                    .into_iter()
                    .map(|(code, body)| HttpResponse::new(code, HashMap::new(), body))
                    .collect(),
            ),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestDispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::new(204, HashMap::new(), Vec::new())))
    }
}

fn client_over(dispatcher: &Arc<RecordingDispatcher>) -> RestClient {
    RestClient::with_dispatcher(dispatcher.clone())
}

#[tokio::test]
async fn test_inventory_request_path_and_query() {
    let dispatcher = RecordingDispatcher::replying(vec![(200, r#"{"data":[]}"#)]);
    let client = client_over(&dispatcher);
    let filters = HashMap::from([("sku.in".to_string(), "A,B".to_string())]);

    InventoryReader::new(&client)
        .get_inventory_for_location(42, &filters)
        .await
        .unwrap();

    let requests = dispatcher.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].http_method, HttpMethod::Get);
    assert_eq!(requests[0].path, "/v3/inventory/locations/42/items?sku.in=A,B");
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn test_create_shipment_body_is_exact() {
    let dispatcher = RecordingDispatcher::replying(vec![(201, r#"{"id":1}"#)]);
    let client = client_over(&dispatcher);

    let shipment = Shipment {
        tracking_number: "1Z999".to_string(),
        items: vec![ShipmentItem::new(10, 2)],
        ..Default::default()
    };
    ShipmentManager::new(&client)
        .create_shipment(55, &shipment)
        .await
        .unwrap();

    let request = &dispatcher.requests()[0];
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.path, "/v2/orders/55/shipments");
    assert_eq!(
        String::from_utf8(request.body_bytes().unwrap()).unwrap(),
        r#"{"tracking_number":"1Z999","merchant_shipping_cost":"","shipping_method":"","comments":"","shipping_provider":"","tracking_carrier":"","items":[{"order_product_id":10,"quantity":2}]}"#
    );
}

#[tokio::test]
async fn test_each_operation_is_one_request() {
    let dispatcher = RecordingDispatcher::replying(vec![
        (200, "[]"),
        (200, r#"{"id":4}"#),
        (200, r#"{"id":4}"#),
        (200, r#"{"id":4}"#),
        (204, ""),
        (204, ""),
    ]);
    let client = client_over(&dispatcher);
    let shipments = ShipmentManager::new(&client);
    let existing = Shipment {
        id: Some(4),
        ..Default::default()
    };

    shipments.list_shipments(1, &HashMap::new()).await.unwrap();
    shipments.get_shipment(1, 4).await.unwrap();
    shipments.create_shipment(1, &existing).await.unwrap();
    shipments.update_shipment(1, &existing).await.unwrap();
    shipments.delete_shipment(1, 4).await.unwrap();
    shipments.delete_all_shipments(1).await.unwrap();

    let calls: Vec<(HttpMethod, String)> = dispatcher
        .requests()
        .into_iter()
        .map(|r| (r.http_method, r.path))
        .collect();
    assert_eq!(
        calls,
        vec![
            (HttpMethod::Get, "/v2/orders/1/shipments".to_string()),
            (HttpMethod::Get, "/v2/orders/1/shipments/4".to_string()),
            (HttpMethod::Post, "/v2/orders/1/shipments".to_string()),
            (HttpMethod::Put, "/v2/orders/1/shipments/4".to_string()),
            (HttpMethod::Delete, "/v2/orders/1/shipments/4".to_string()),
            (HttpMethod::Delete, "/v2/orders/1/shipments".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_rest_client_rejects_empty_path() {
    let dispatcher = RecordingDispatcher::replying(Vec::new());
    let client = client_over(&dispatcher);

    let result = client.get("/").await;
    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    assert!(dispatcher.requests().is_empty());
}

#[tokio::test]
async fn test_status_blind_delete_ignores_server_error() {
    let dispatcher = RecordingDispatcher::replying(vec![(500, "boom")]);
    let client = client_over(&dispatcher);

    assert!(ShipmentManager::new(&client)
        .delete_shipment(1, 2)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_error() {
    struct FailingDispatcher;

    #[async_trait]
    impl RequestDispatcher for FailingDispatcher {
        async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            Err(HttpError::InvalidRequest(
                bigcommerce_api::InvalidHttpRequestError::MissingBody {
                    method: request.http_method.to_string(),
                },
            ))
        }
    }

    let client = RestClient::with_dispatcher(Arc::new(FailingDispatcher));
    let result = ShipmentManager::new(&client).delete_all_shipments(1).await;

    assert!(matches!(
        result,
        Err(ResourceError::Rest(RestError::Http(HttpError::InvalidRequest(_))))
    ));
}
