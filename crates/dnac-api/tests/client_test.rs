#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{basic_auth, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dnac_api::{ApiClient, Error, VlanId, WirelessVlan};

// ── Helpers ─────────────────────────────────────────────────────────

fn client_for(server: &MockServer) -> ApiClient {
    let base_url = Url::parse(&server.uri()).unwrap();
    ApiClient::with_client(
        reqwest::Client::new(),
        base_url,
        "admin".into(),
        secrecy::SecretString::from("password".to_owned()),
    )
}

/// Mount the token endpoint; every test needs it because the client
/// authenticates lazily before its first request.
async fn mount_auth(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/api/system/v1/auth/token"))
        .and(basic_auth("admin", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Token": token })))
        .mount(server)
        .await;
}

// ── Authentication ──────────────────────────────────────────────────

#[tokio::test]
async fn test_token_attached_to_requests() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok-1").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/network-device"))
        .and(header("X-Auth-Token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let devices = client.list_devices().await.unwrap();
    assert!(devices.is_empty());
}

#[tokio::test]
async fn test_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/system/v1/auth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.authenticate().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_expired_token_reauth_and_replay_once() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    // First hit: expired token. Mounted first so it matches first,
    // then retires after one use.
    Mock::given(method("GET"))
        .and(path("/api/v1/network-device"))
        .respond_with(ResponseTemplate::new(401))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/network-device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{
                "id": "dev-1",
                "hostname": "switch1",
                "managementIpAddress": "10.0.0.1",
                "family": "Switches and Hubs"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let devices = client.list_devices().await.unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].hostname, "switch1");
}

#[tokio::test]
async fn test_second_401_is_not_retried() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/network-device"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.list_devices().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

// ── Sites ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_sites_preserves_server_order() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/group/"))
        .and(query_param("groupType", "SITE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [
                { "id": "s2", "name": "Branch", "groupNameHierarchy": "Global/Branch" },
                { "id": "s1", "name": "HQ", "groupNameHierarchy": "Global/HQ" }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let sites = client.list_sites().await.unwrap();
    assert_eq!(sites.len(), 2);
    assert_eq!(sites[0].name, "Branch");
    assert_eq!(sites[1].group_name_hierarchy, "Global/HQ");
}

#[tokio::test]
async fn test_malformed_site_record_fails_whole_listing() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    // Second record is missing "name": the entire listing must fail,
    // not just that record.
    Mock::given(method("GET"))
        .and(path("/api/v1/group/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [
                { "id": "s1", "name": "HQ", "groupNameHierarchy": "Global/HQ" },
                { "id": "s2", "groupNameHierarchy": "Global/Branch" }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.list_sites().await;
    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Wireless VLANs ──────────────────────────────────────────────────

#[tokio::test]
async fn test_list_wireless_vlans() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/commonsetting/global/-1"))
        .and(query_param("key", "interface.info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{
                "instanceType": "interface",
                "key": "interface.info",
                "value": [
                    { "interfaceName": "management", "vlanId": 1 },
                    { "interfaceName": "Wireless Test", "vlanId": 87 }
                ]
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let vlans = client.list_wireless_vlans().await.unwrap();
    assert_eq!(vlans.len(), 2);
    assert_eq!(vlans[1].interface_name, "Wireless Test");
    assert_eq!(vlans[1].vlan_id, VlanId::Number(87));
}

#[tokio::test]
async fn test_list_wireless_vlans_accepts_string_ids() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    // Lists written by CLI clients store the vlanId as the raw string
    // they were invoked with; decoding must accept both forms.
    Mock::given(method("GET"))
        .and(path("/api/v1/commonsetting/global/-1"))
        .and(query_param("key", "interface.info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{
                "value": [
                    { "interfaceName": "management", "vlanId": 1 },
                    { "interfaceName": "Wireless Test", "vlanId": "87" }
                ]
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let vlans = client.list_wireless_vlans().await.unwrap();
    assert_eq!(vlans.len(), 2);
    assert_eq!(vlans[1].vlan_id, VlanId::Text("87".into()));
    assert_eq!(vlans[1].vlan_id.to_string(), "87");
}

#[tokio::test]
async fn test_create_wireless_vlan_posts_full_replacement_list() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/commonsetting/global/-1"))
        .and(query_param("key", "interface.info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{
                "value": [{ "interfaceName": "A", "vlanId": 10 }]
            }]
        })))
        .mount(&server)
        .await;

    // The replacement must carry the prior element untouched plus the
    // new pair appended.
    let expected_body = json!([
        {
            "instanceType": "interface",
            "namespace": "global",
            "type": "interface.setting",
            "key": "interface.info",
            "value": [
                { "interfaceName": "A", "vlanId": 10 },
                { "interfaceName": "B", "vlanId": 20 }
            ],
            "groupUuid": "-1",
            "inheritedGroupUuid": "",
            "inheritedGroupName": ""
        }
    ]);

    Mock::given(method("POST"))
        .and(path("/api/v1/commonsetting/global/-1"))
        .and(query_param("key", "interface.info"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "taskId": "t1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .create_wireless_vlan(WirelessVlan {
            interface_name: "B".into(),
            vlan_id: VlanId::Number(20),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_wireless_vlan_filters_matching_elements() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    // "B" carries a string-valued vlanId, as written by older clients;
    // deletion compares textually and must still remove it.
    Mock::given(method("GET"))
        .and(path("/api/v1/commonsetting/global/-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{
                "value": [
                    { "interfaceName": "A", "vlanId": 10 },
                    { "interfaceName": "B", "vlanId": "20" }
                ]
            }]
        })))
        .mount(&server)
        .await;

    let expected_body = json!([
        {
            "instanceType": "interface",
            "namespace": "global",
            "type": "interface.setting",
            "key": "interface.info",
            "value": [{ "interfaceName": "A", "vlanId": 10 }],
            "groupUuid": "-1",
            "inheritedGroupUuid": "",
            "inheritedGroupName": ""
        }
    ]);

    Mock::given(method("POST"))
        .and(path("/api/v1/commonsetting/global/-1"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "taskId": "t1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_wireless_vlan("20").await.unwrap();
}

// ── WLANs ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_wlans_filters_non_wlan_records() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/commonsetting/wlan/-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [
                {
                    "instanceType": "reference",
                    "key": "wlan.profile",
                    "value": "not-a-wlan"
                },
                {
                    "instanceType": "wlan",
                    "key": "wlan.info.corp",
                    "value": [{ "ssid": "corp", "wlanType": "Enterprise" }]
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let wlans = client.list_wlans().await.unwrap();
    assert_eq!(wlans.len(), 1);
    assert_eq!(wlans[0].ssid, "corp");
    assert_eq!(wlans[0].key, "wlan.info.corp");
}

#[tokio::test]
async fn test_create_wlan_keys_record_by_ssid() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/commonsetting/wlan/-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "taskId": "t1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.create_wlan("guest-net").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|r| r.method.to_string() == "POST" && r.url.path() == "/api/v1/commonsetting/wlan/-1")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&post.body).unwrap();
    assert_eq!(body[0]["key"], "wlan.info.guest-net");
    assert_eq!(body[0]["value"][0]["ssid"], "guest-net");
}

// ── Profiles ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_profiles_resolves_assigned_sites() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/siteprofile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{
                "siteProfileUuid": "p1",
                "name": "corp-wlan",
                "namespace": "wlan"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/siteprofile/p1"))
        .and(query_param("includeSites", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "siteProfileUuid": "p1",
                "sites": [{ "name": "HQ", "uuid": "s1" }]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let profiles = client.list_profiles().await.unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, "p1");
    assert_eq!(profiles[0].sites.len(), 1);
    assert_eq!(profiles[0].sites[0].name, "HQ");
}

#[tokio::test]
async fn test_assign_then_unassign_hits_symmetric_paths() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/siteprofile/p1/site/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "taskId": "t1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/siteprofile/p1/site/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "taskId": "t2" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.assign_profile_site("p1", "s1").await.unwrap();
    client.unassign_profile_site("p1", "s1").await.unwrap();
}

// ── Templates / deploy ──────────────────────────────────────────────

#[tokio::test]
async fn test_deploy_template_builds_managed_device_ip_target() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    let expected_body = json!({
        "templateId": "tmpl-1",
        "targetInfo": [{
            "id": "10.0.0.1",
            "type": "MANAGED_DEVICE_IP",
            "params": { "VLANID": "3001" }
        }]
    });

    Mock::given(method("POST"))
        .and(path("/api/v1/template-programmer/template/deploy"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deploymentId": "dep-42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client
        .deploy_template("tmpl-1", "10.0.0.1", &json!({ "VLANID": "3001" }))
        .await
        .unwrap();
    assert_eq!(id, "dep-42");
}

#[tokio::test]
async fn test_deploy_template_extracts_id_from_prose_wrapper() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/template-programmer/template/deploy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deploymentId": "Deployment of Template Id: dep-42"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = client
        .deploy_template("tmpl-1", "10.0.0.1", &json!({}))
        .await
        .unwrap();
    assert_eq!(id, "dep-42");
}

#[tokio::test]
async fn test_deployment_status_decodes_per_device_status() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/template-programmer/template/deploy/status/dep-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "SUCCESS",
            "devices": [{ "status": "SUCCESS", "ipAddress": "10.0.0.1" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let status = client.deployment_status("dep-42").await.unwrap();
    assert_eq!(status.devices[0].status, "SUCCESS");
}

// ── Devices ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_device_by_hostname_not_found() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/api/v1/network-device"))
        .and(query_param("hostname", "nope"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.device_by_hostname("nope").await;
    assert!(
        matches!(result, Err(Error::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn test_assign_device_site_posts_member_body() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("POST"))
        .and(path("/api/v1/group/s1/member"))
        .and(body_json(json!({ "networkdevice": ["d1"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": { "taskId": "t1" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.assign_device_site("d1", "s1").await.unwrap();
}

// ── API errors ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_http_error_surfaces_status_and_body() {
    let server = MockServer::start().await;
    mount_auth(&server, "tok").await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/siteprofile/bad-id"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client.delete_profile("bad-id").await;
    match result {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}
