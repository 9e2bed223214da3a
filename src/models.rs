use anyhow::Context;
use lambda_runtime::tracing;

/// Substituted when an envelope carries no dispatch id. Unrelated messages can
/// collide on the same destination key under the `messages/` route.
pub const UNKNOWN_DISPATCH_ID: &str = "unknown";

/// S3 notification keys are form-urlencoded: spaces arrive as `+` and literal
/// bytes as `%xx` sequences.
#[tracing::instrument]
pub fn decode_object_key(key: &str) -> Result<String, anyhow::Error> {
    let replaced = key.replace('+', " ");
    let decoded = urlencoding::decode(&replaced).context("UTF-8")?;
    Ok(decoded.into_owned())
}

/// The JSON document inside a decompressed message archive.
///
/// Only the identifying fields and the html payload are read; unknown fields
/// are ignored.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MessageEnvelope {
    pub dispatch_id: Option<String>,
    pub campaign_id: Option<String>,
    pub canvas_id: Option<String>,
    pub canvas_step_id: Option<String>,
    pub html_body: Option<String>,
}

/// Routing fields only count when non-empty.
fn route_field(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

impl MessageEnvelope {
    /// Derives the destination key for the extracted html. Campaign routing
    /// wins over canvas routing; a message tied to neither lands under
    /// `messages/`.
    pub fn destination_key(&self) -> String {
        let dispatch_id = self.dispatch_id.as_deref().unwrap_or(UNKNOWN_DISPATCH_ID);

        if let Some(campaign_id) = route_field(&self.campaign_id) {
            format!("campaigns/{campaign_id}/{dispatch_id}/index.html")
        } else if let (Some(canvas_id), Some(step_id)) = (
            route_field(&self.canvas_id),
            route_field(&self.canvas_step_id),
        ) {
            format!("canvases/{canvas_id}/steps/{step_id}/{dispatch_id}/index.html")
        } else {
            format!("messages/{dispatch_id}/index.html")
        }
    }

    /// Splits the envelope into its publishable parts, or `None` when there is
    /// no html payload.
    pub fn into_publish_target(self) -> Option<PublishTarget> {
        let key = self.destination_key();
        match self.html_body {
            Some(html) if !html.is_empty() => Some(PublishTarget { key, html }),
            _ => None,
        }
    }
}

/// A derived destination key plus the html to publish there.
#[derive(Debug, PartialEq, Eq)]
pub struct PublishTarget {
    pub key: String,
    pub html: String,
}

/// What the pipeline did with an archive.
#[derive(Debug, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// Html was extracted and published at the public url.
    Published { url: String },
    /// The envelope carried no html payload; a deliberate no-op.
    NoContent,
}

impl ExtractOutcome {
    pub fn into_response(self) -> HandlerResponse {
        match self {
            ExtractOutcome::Published { url } => HandlerResponse {
                status_code: 200,
                body: "HTML extraction and upload successful".to_string(),
                url: Some(url),
            },
            ExtractOutcome::NoContent => HandlerResponse {
                status_code: 200,
                body: "No HTML content found in the message".to_string(),
                url: None,
            },
        }
    }
}

/// The outcome record returned to the invoking platform.
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Virtual-hosted s3 url where a published object is publicly reachable.
pub fn public_url(bucket: &str, key: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{key}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> MessageEnvelope {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn campaign_route_wins_over_canvas() {
        let envelope = envelope(
            r#"{"dispatch_id":"d1","campaign_id":"c1","canvas_id":"cv1","canvas_step_id":"s1"}"#,
        );
        assert_eq!(envelope.destination_key(), "campaigns/c1/d1/index.html");
    }

    #[test]
    fn canvas_route_needs_both_canvas_and_step() {
        let with_both = envelope(r#"{"dispatch_id":"d1","canvas_id":"cv1","canvas_step_id":"s1"}"#);
        assert_eq!(
            with_both.destination_key(),
            "canvases/cv1/steps/s1/d1/index.html"
        );

        let canvas_only = envelope(r#"{"dispatch_id":"d1","canvas_id":"cv1"}"#);
        assert_eq!(canvas_only.destination_key(), "messages/d1/index.html");
    }

    #[test]
    fn fallback_route_defaults_dispatch_id_to_unknown() {
        let envelope = envelope(r#"{}"#);
        assert_eq!(envelope.destination_key(), "messages/unknown/index.html");
    }

    #[test]
    fn empty_routing_fields_are_treated_as_absent() {
        let envelope = envelope(
            r#"{"dispatch_id":"d1","campaign_id":"","canvas_id":"cv1","canvas_step_id":""}"#,
        );
        assert_eq!(envelope.destination_key(), "messages/d1/index.html");
    }

    #[test]
    fn unknown_envelope_fields_are_ignored() {
        let envelope = envelope(
            r#"{"dispatch_id":"d1","campaign_id":"c1","html_body":"<p>hi</p>","message_variation_id":"v2","sent_at":1710000000}"#,
        );
        assert_eq!(envelope.destination_key(), "campaigns/c1/d1/index.html");
    }

    #[test]
    fn publish_target_carries_key_and_html() {
        let target = envelope(r#"{"dispatch_id":"test123","campaign_id":"campaign456","html_body":"<html><body><h1>Test Email</h1></body></html>"}"#)
            .into_publish_target()
            .unwrap();

        assert_eq!(target.key, "campaigns/campaign456/test123/index.html");
        assert!(target.html.contains("Test Email"));
    }

    #[test]
    fn missing_or_empty_html_body_yields_no_target() {
        assert_eq!(envelope(r#"{"dispatch_id":"d1"}"#).into_publish_target(), None);
        assert_eq!(
            envelope(r#"{"dispatch_id":"d1","html_body":""}"#).into_publish_target(),
            None
        );
    }

    #[test]
    fn decodes_plus_and_percent_sequences() {
        assert_eq!(
            decode_object_key("emails/My+Message%2B1.json.gz").unwrap(),
            "emails/My Message+1.json.gz"
        );
    }

    #[test]
    fn plain_keys_decode_to_themselves() {
        assert_eq!(
            decode_object_key("emails/archive.json.gz").unwrap(),
            "emails/archive.json.gz"
        );
    }

    #[test]
    fn public_url_is_virtual_hosted() {
        assert_eq!(
            public_url("render-bucket", "campaigns/c1/d1/index.html"),
            "https://render-bucket.s3.amazonaws.com/campaigns/c1/d1/index.html"
        );
    }

    #[test]
    fn response_serializes_camel_case_and_omits_missing_url() {
        let published = serde_json::to_value(ExtractOutcome::Published {
            url: "https://render-bucket.s3.amazonaws.com/messages/d1/index.html".to_string(),
        }
        .into_response())
        .unwrap();
        assert_eq!(published["statusCode"], 200);
        assert_eq!(
            published["url"],
            "https://render-bucket.s3.amazonaws.com/messages/d1/index.html"
        );

        let skipped = serde_json::to_value(ExtractOutcome::NoContent.into_response()).unwrap();
        assert_eq!(skipped["statusCode"], 200);
        assert_eq!(skipped["body"], "No HTML content found in the message");
        assert!(skipped.get("url").is_none());
    }
}
