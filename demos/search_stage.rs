//! Builds a `$search` + `$addFields` pipeline and prints it as extended JSON.
//!
//! Run with `RUST_LOG=trace` to see each node as it is evaluated.

use chrono::Utc;
use mql::codec::{CodecRegistry, HostDocument};
use mql::expressions::{of_array, of_date, of_decimal, of_document, of_null, of_string_array};
use mql::search::{SearchPath, combine, field_path, wildcard_path};
use mql::{Document, EvaluationContext, JsonMode, MqlError, SimpleCodecRegistry, Value};
use std::str::FromStr;

#[derive(Debug)]
struct Rating {
    stars: u8,
    source: &'static str,
}

fn main() -> Result<(), MqlError> {
    env_logger::init();

    let registry = SimpleCodecRegistry::new().register(|r: &Rating, _: &dyn CodecRegistry| {
        Ok(Value::Document(
            Document::new()
                .append("stars", i32::from(r.stars))
                .append("source", r.source),
        ))
    });
    let e_ctx = EvaluationContext::new(&registry);

    let paths: Vec<SearchPath> = vec![
        field_path("title")?.into(),
        field_path("plot")?.multi("english")?.into(),
        wildcard_path("cast.*")?.into(),
    ];
    let search = Document::new().append(
        "$search",
        Document::new().append(
            "text",
            Document::new()
                .append("query", "space")
                .append("path", combine(&paths)?),
        ),
    );

    let price = mql::bson::Decimal::from_str("9.99")
        .map_err(|e| mql::ExpressionError::InvalidArgument(e.to_string()))?;
    let extras = of_array([
        of_string_array(["featured", "new"]),
        of_decimal(price),
        of_date(Utc::now()),
        of_document(HostDocument::new().append_object("rating", Rating { stars: 4, source: "critics" })),
        of_null(),
    ]);
    let add_fields = Document::new().append("$addFields", extras.to_document_field("extras", &e_ctx)?);

    let stages = vec![Value::Document(search), Value::Document(add_fields)];
    log::info!("Rendered pipeline with {} stages", stages.len());
    let pipeline = Value::Array(stages);
    println!("{}", pipeline.to_extended_json(JsonMode::Relaxed));
    println!("{}", pipeline.to_extended_json(JsonMode::Canonical));
    Ok(())
}
