use axum::Json;
use serde_json::{json, Value};

use crate::analysis::validator::{CV_FIELD, JOB_DESCRIPTION_FIELD};

/// GET /openapi.json (development only)
/// Static OpenAPI 3 description of the public endpoints.
pub async fn openapi_handler() -> Json<Value> {
    Json(json!({
        "openapi": "3.0.3",
        "info": {
            "title": "CV Analyzer API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": {
                "get": {
                    "operationId": "HealthCheck",
                    "responses": {
                        "200": {
                            "description": "Service is up",
                            "content": {"application/json": {"schema": {
                                "type": "object",
                                "properties": {
                                    "status": {"type": "string", "example": "healthy"},
                                    "timestamp": {"type": "string", "format": "date-time"}
                                }
                            }}}
                        }
                    }
                }
            },
            "/api/analyze-cv": {
                "post": {
                    "operationId": "AnalyzeCV",
                    "requestBody": {
                        "required": true,
                        "content": {"multipart/form-data": {"schema": {
                            "type": "object",
                            "required": [CV_FIELD, JOB_DESCRIPTION_FIELD],
                            "properties": {
                                "cvFile": {"type": "string", "format": "binary"},
                                "jobDescription": {"type": "string"}
                            }
                        }}}
                    },
                    "responses": {
                        "200": {
                            "description": "Generated cover letter",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/AnalysisResponse"}}}
                        },
                        "400": {
                            "description": "Invalid upload",
                            "content": {"text/plain": {"schema": {"type": "string"}}}
                        },
                        "500": {
                            "description": "Extraction or generation failed",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/AnalysisResponse"}}}
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "AnalysisResponse": {
                    "type": "object",
                    "properties": {
                        "coverLetterText": {"type": "string"},
                        "success": {"type": "boolean"},
                        "errorMessage": {"type": "string", "nullable": true}
                    }
                }
            }
        }
    }))
}
