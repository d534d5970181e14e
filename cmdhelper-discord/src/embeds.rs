/// Mapping from the platform-neutral embed body to serenity's builder.
use cmdhelper_commands::EmbedMessage;
use serenity::builder::CreateEmbed;

/// Convert an [`EmbedMessage`] into a serenity [`CreateEmbed`]. Fields keep
/// their order and are never rendered inline.
pub fn build_embed(embed: EmbedMessage) -> CreateEmbed {
    let mut builder = CreateEmbed::new().title(embed.title);
    for field in embed.fields {
        builder = builder.field(field.name, field.value, false);
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdhelper_commands::EmbedField;

    #[test]
    fn embed_keeps_title_and_fields() {
        let embed = build_embed(EmbedMessage {
            title: "Help".to_string(),
            fields: vec![
                EmbedField {
                    name: "!say".to_string(),
                    value: "Say something (Usage: !say <text>)".to_string(),
                },
                EmbedField {
                    name: "!ping".to_string(),
                    value: "Liveness check (Usage: !ping)".to_string(),
                },
            ],
        });

        let value = serde_json::to_value(&embed).unwrap();
        assert_eq!(value["title"], "Help");
        assert_eq!(value["fields"][0]["name"], "!say");
        assert_eq!(
            value["fields"][0]["value"],
            "Say something (Usage: !say <text>)"
        );
        assert_eq!(value["fields"][0]["inline"], false);
        assert_eq!(value["fields"][1]["name"], "!ping");
    }

    #[test]
    fn fieldless_embed_serializes_without_fields() {
        let embed = build_embed(EmbedMessage {
            title: "Help".to_string(),
            fields: Vec::new(),
        });

        let value = serde_json::to_value(&embed).unwrap();
        assert_eq!(value["title"], "Help");
        assert!(value["fields"].as_array().is_none_or(|f| f.is_empty()));
    }
}
