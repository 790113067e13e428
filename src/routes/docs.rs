use axum::{
    Json,
    response::{Html, Redirect},
};
use serde_json::{Value, json};

const SWAGGER_UI_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>ZapGap Chat API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: '/openapi.json', dom_id: '#swagger-ui' });
    };
  </script>
</body>
</html>
"#;

pub async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}

pub async fn swagger_handler() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

pub async fn docs_redirect() -> Redirect {
    Redirect::temporary("/swagger")
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/ChatError" } }
        }
    })
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "version": "1.0.0",
            "title": "ZapGap Chat API",
            "description": "Chat gateway that forwards messages to a Langflow flow"
        },
        "servers": [{
            "url": "http://localhost:8000",
            "description": "Development server"
        }],
        "paths": {
            "/": {
                "get": {
                    "tags": ["Health"],
                    "responses": {
                        "200": {
                            "description": "Health check response",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/HealthResponse" }
                                }
                            }
                        }
                    }
                }
            },
            "/chat": {
                "post": {
                    "tags": ["Chat"],
                    "parameters": [{
                        "name": "chatId",
                        "in": "query",
                        "required": false,
                        "description": "Optional chat session identifier. When provided it is used as the Langflow session_id and only the latest message text is returned",
                        "schema": { "type": "string", "example": "user_123" }
                    }],
                    "requestBody": {
                        "description": "Chat message request",
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/ChatRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Full Langflow response, or a single message when chatId is given",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "oneOf": [
                                            { "$ref": "#/components/schemas/LangflowResponse" },
                                            { "$ref": "#/components/schemas/SimplifiedChatResponse" }
                                        ]
                                    }
                                },
                                "text/event-stream": { "schema": { "type": "string" } }
                            }
                        },
                        "400": error_response("Bad request - invalid or missing message"),
                        "500": error_response("Internal server error"),
                        "502": error_response("Bad gateway - external API error")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "ChatRequest": {
                    "type": "object",
                    "required": ["msg"],
                    "properties": {
                        "msg": {
                            "type": "string",
                            "minLength": 1,
                            "description": "The message to send to the chat API",
                            "example": "Hello, how are you?"
                        }
                    }
                },
                "ChatError": {
                    "type": "object",
                    "required": ["error"],
                    "properties": {
                        "error": { "type": "string" },
                        "message": { "type": "string" },
                        "status": { "type": "number", "description": "HTTP status code from external API" }
                    }
                },
                "LangflowResponse": {
                    "type": "object",
                    "properties": {
                        "session_id": { "type": "string", "example": "user_1" },
                        "outputs": { "type": "array", "items": {} }
                    }
                },
                "SimplifiedChatResponse": {
                    "type": "object",
                    "required": ["message"],
                    "properties": {
                        "message": { "type": "string" },
                        "session_id": { "type": "string" }
                    }
                },
                "HealthResponse": {
                    "type": "object",
                    "required": ["message"],
                    "properties": { "message": { "type": "string", "example": "Hello Hono!" } }
                }
            }
        }
    })
}
