#[cfg(all(test, feature = "openapi"))]
mod tests {
    use crate::doc::WebhooksApiDoc;
    use utoipa::OpenApi;

    #[test]
    fn test_success_responses_document_the_envelope() {
        let doc = serde_json::to_value(WebhooksApiDoc::openapi()).unwrap();
        let get = &doc["paths"]["/organizations/{org_id}/webhooks/{webhook_id}"]["get"];
        assert!(get["responses"]["200"]["content"]["application/json"]["schema"].is_object());

        // Webhook has no `data` property, only the envelope does
        let rendered = doc.to_string();
        assert!(rendered.contains("\"data\""));
    }
}
