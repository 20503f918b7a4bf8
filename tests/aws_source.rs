use aws_sdk_elasticloadbalancing::Client as ELBClient;
use aws_sdk_elasticloadbalancing::config::retry::RetryConfig;
use aws_sdk_elasticloadbalancing::config::{BehaviorVersion, Credentials, Region};
use elbform::{AwsElbSource, ElbformError, LoadBalancerSource, NetworkPlacement, load_load_balancers};
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NAMESPACE: &str = "http://elasticloadbalancing.amazonaws.com/doc/2012-06-01/";

fn source(server: &MockServer) -> AwsElbSource {
    let config = aws_sdk_elasticloadbalancing::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("ap-northeast-1"))
        .credentials_provider(Credentials::new("AKIDEXAMPLE", "secret", None, None, "test"))
        .retry_config(RetryConfig::disabled())
        .endpoint_url(server.uri())
        .build();
    AwsElbSource::new(ELBClient::from_conf(config))
}

fn xml(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/xml")
}

fn describe_page(members: &str, next_marker: Option<&str>) -> String {
    let marker = next_marker
        .map(|m| format!("<NextMarker>{}</NextMarker>", m))
        .unwrap_or_default();
    format!(
        r#"<DescribeLoadBalancersResponse xmlns="{NAMESPACE}">
  <DescribeLoadBalancersResult>
    <LoadBalancerDescriptions>{members}</LoadBalancerDescriptions>
    {marker}
  </DescribeLoadBalancersResult>
  <ResponseMetadata><RequestId>req-1</RequestId></ResponseMetadata>
</DescribeLoadBalancersResponse>"#
    )
}

const HOGE_MEMBER: &str = r#"
      <member>
        <LoadBalancerName>hoge</LoadBalancerName>
        <DNSName>hoge-12345678.ap-northeast-1.elb.amazonaws.com</DNSName>
        <VPCId>vpc-1234abcd</VPCId>
        <Subnets><member>subnet-1234abcd</member><member>subnet-5678efgh</member></Subnets>
        <AvailabilityZones><member>ap-northeast-1b</member><member>ap-northeast-1c</member></AvailabilityZones>
        <SecurityGroups><member>sg-1234abcd</member><member>sg-5678efgh</member></SecurityGroups>
        <Instances><member><InstanceId>i-1234abcd</InstanceId></member></Instances>
        <ListenerDescriptions>
          <member>
            <Listener>
              <Protocol>HTTPS</Protocol>
              <LoadBalancerPort>443</LoadBalancerPort>
              <InstanceProtocol>HTTP</InstanceProtocol>
              <InstancePort>80</InstancePort>
              <SSLCertificateId>arn:aws:iam::123456789012:server-certificate/foobar</SSLCertificateId>
            </Listener>
            <PolicyNames><member>ELBSecurityPolicy-2014-01</member></PolicyNames>
          </member>
        </ListenerDescriptions>
        <HealthCheck>
          <Target>HTTP:8080/status</Target>
          <Interval>30</Interval>
          <Timeout>5</Timeout>
          <UnhealthyThreshold>2</UnhealthyThreshold>
          <HealthyThreshold>10</HealthyThreshold>
        </HealthCheck>
        <SourceSecurityGroup>
          <OwnerAlias>123456789012</OwnerAlias>
          <GroupName>default</GroupName>
        </SourceSecurityGroup>
      </member>"#;

const FUGA_MEMBER: &str = r#"
      <member>
        <LoadBalancerName>fuga</LoadBalancerName>
        <DNSName>fuga-90123456.ap-northeast-1.elb.amazonaws.com</DNSName>
        <AvailabilityZones><member>ap-northeast-1b</member><member>ap-northeast-1c</member></AvailabilityZones>
        <Instances><member><InstanceId>i-5678efgh</InstanceId></member></Instances>
        <ListenerDescriptions>
          <member>
            <Listener>
              <Protocol>TCP</Protocol>
              <LoadBalancerPort>80</LoadBalancerPort>
              <InstanceProtocol>TCP</InstanceProtocol>
              <InstancePort>8080</InstancePort>
            </Listener>
          </member>
        </ListenerDescriptions>
        <HealthCheck>
          <Target>TCP:8080</Target>
          <Interval>30</Interval>
          <Timeout>5</Timeout>
          <UnhealthyThreshold>2</UnhealthyThreshold>
          <HealthyThreshold>10</HealthyThreshold>
        </HealthCheck>
        <SourceSecurityGroup>
          <OwnerAlias>amazon-elb</OwnerAlias>
          <GroupName>amazon-elb-sg</GroupName>
        </SourceSecurityGroup>
      </member>"#;

fn attributes_response(cross_zone: bool, draining_timeout: u32, idle_timeout: u32) -> String {
    format!(
        r#"<DescribeLoadBalancerAttributesResponse xmlns="{NAMESPACE}">
  <DescribeLoadBalancerAttributesResult>
    <LoadBalancerAttributes>
      <CrossZoneLoadBalancing><Enabled>{cross_zone}</Enabled></CrossZoneLoadBalancing>
      <AccessLog><Enabled>false</Enabled></AccessLog>
      <ConnectionDraining><Enabled>true</Enabled><Timeout>{draining_timeout}</Timeout></ConnectionDraining>
      <ConnectionSettings><IdleTimeout>{idle_timeout}</IdleTimeout></ConnectionSettings>
    </LoadBalancerAttributes>
  </DescribeLoadBalancerAttributesResult>
  <ResponseMetadata><RequestId>req-2</RequestId></ResponseMetadata>
</DescribeLoadBalancerAttributesResponse>"#
    )
}

#[tokio::test]
async fn test_list_load_balancers_follows_markers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=DescribeLoadBalancers"))
        .and(body_string_contains("Marker=page2"))
        .respond_with(xml(describe_page(FUGA_MEMBER, None)))
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=DescribeLoadBalancers"))
        .respond_with(xml(describe_page(HOGE_MEMBER, Some("page2"))))
        .with_priority(2)
        .mount(&mock_server)
        .await;

    let load_balancers = source(&mock_server).list_load_balancers().await.unwrap();

    assert_eq!(load_balancers.len(), 2);
    assert_eq!(load_balancers[0].load_balancer_name, "hoge");
    assert_eq!(load_balancers[0].vpc_id.as_deref(), Some("vpc-1234abcd"));
    assert_eq!(load_balancers[0].subnets.len(), 2);
    assert_eq!(load_balancers[1].load_balancer_name, "fuga");
    assert!(load_balancers[1].vpc_id.is_none());
    assert_eq!(load_balancers[1].listener_descriptions[0].listener.instance_port, 8080);
}

#[tokio::test]
async fn test_load_balancer_attributes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=DescribeLoadBalancerAttributes"))
        .and(body_string_contains("LoadBalancerName=hoge"))
        .respond_with(xml(attributes_response(true, 300, 60)))
        .mount(&mock_server)
        .await;

    let attributes = source(&mock_server)
        .load_balancer_attributes("hoge")
        .await
        .unwrap();

    assert!(attributes.cross_zone_load_balancing.enabled);
    assert!(attributes.connection_draining.enabled);
    assert_eq!(attributes.connection_draining.timeout, 300);
    assert_eq!(attributes.connection_settings.idle_timeout, 60);
}

#[tokio::test]
async fn test_load_load_balancers_over_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=DescribeLoadBalancers&"))
        .respond_with(xml(describe_page(&format!("{HOGE_MEMBER}{FUGA_MEMBER}"), None)))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=DescribeLoadBalancerAttributes"))
        .and(body_string_contains("LoadBalancerName=hoge"))
        .respond_with(xml(attributes_response(true, 300, 60)))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=DescribeLoadBalancerAttributes"))
        .and(body_string_contains("LoadBalancerName=fuga"))
        .respond_with(xml(attributes_response(false, 900, 90)))
        .mount(&mock_server)
        .await;

    let load_balancers = load_load_balancers(&source(&mock_server)).await.unwrap();

    assert_eq!(load_balancers.len(), 2);
    assert!(matches!(
        load_balancers[0].placement,
        NetworkPlacement::Isolated { .. }
    ));
    assert!(matches!(
        load_balancers[1].placement,
        NetworkPlacement::Classic { .. }
    ));
    assert_eq!(load_balancers[1].listeners[0].lb_protocol, "tcp");
    assert_eq!(
        load_balancers[1].source_security_group.as_deref(),
        Some("amazon-elb-sg")
    );
    assert!(!load_balancers[1].cross_zone_load_balancing);
    assert_eq!(load_balancers[1].idle_timeout, 90);
}

#[tokio::test]
async fn test_api_error_surfaces_as_fetch_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(403).set_body_raw(
                format!(
                    r#"<ErrorResponse xmlns="{NAMESPACE}">
  <Error><Type>Sender</Type><Code>AccessDenied</Code><Message>User is not authorized</Message></Error>
  <RequestId>req-3</RequestId>
</ErrorResponse>"#
                ),
                "text/xml",
            ),
        )
        .mount(&mock_server)
        .await;

    let result = load_load_balancers(&source(&mock_server)).await;
    assert!(matches!(result, Err(ElbformError::Fetch(_))));
}
