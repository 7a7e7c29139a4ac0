//! The `GetCharacters` query and its response envelope.

use serde::{Deserialize, Serialize};

use crate::state::CharacterPage;

use super::Result;

/// Parameterized request sent for every page.
///
/// Empty `status`/`species` values are passed through; the server treats them
/// as "no filter".
pub const CHARACTERS_QUERY: &str = "\
query GetCharacters($page: Int, $status: String, $species: String) {
  characters(page: $page, filter: { status: $status, species: $species }) {
    info {
      pages
      next
      prev
    }
    results {
      id
      name
      status
      species
      gender
      image
      origin {
        name
      }
    }
  }
}";

/// Variables bound to [`CHARACTERS_QUERY`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryVariables {
    /// Page number, starting at 1.
    pub page: u32,
    /// Status filter text.
    pub status: String,
    /// Species filter text.
    pub species: String,
}

impl QueryVariables {
    /// What: Key identifying this request in the response cache.
    ///
    /// Output:
    /// - Serialized variables; field order is fixed by the struct definition.
    #[must_use]
    pub fn cache_key(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!("{}|{}|{}", self.page, self.status, self.species)
        })
    }
}

/// JSON body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    /// Query document.
    pub query: &'a str,
    /// Bound variables.
    pub variables: &'a QueryVariables,
}

impl<'a> GraphqlRequest<'a> {
    /// Character page request for the given variables.
    #[must_use]
    pub const fn characters(variables: &'a QueryVariables) -> Self {
        Self {
            query: CHARACTERS_QUERY,
            variables,
        }
    }
}

/// Top-level GraphQL response.
#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    /// Payload, absent on hard failures.
    #[serde(default)]
    data: Option<CharactersData>,
    /// Errors reported by the server.
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

/// `data` member of the response.
#[derive(Debug, Deserialize)]
struct CharactersData {
    /// The requested page.
    #[serde(default)]
    characters: Option<CharacterPage>,
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
struct GraphqlError {
    /// Human-readable message.
    #[serde(default)]
    message: String,
}

/// What: Decode a GraphQL response body into a character page.
///
/// Inputs:
/// - `body`: Raw JSON text returned by the endpoint
///
/// Output:
/// - `Ok(CharacterPage)` when `data.characters` is present and no errors were reported
///
/// # Errors
/// - Returns `Err` when the body is not valid JSON for the expected shape
/// - Returns `Err` when the response carries a non-empty `errors` array
/// - Returns `Err` when `data.characters` is missing or `null`
pub fn decode_characters(body: &str) -> Result<CharacterPage> {
    let resp: GraphqlResponse = serde_json::from_str(body)?;
    if let Some(errors) = resp.errors.filter(|e| !e.is_empty()) {
        let joined = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(format!("GraphQL errors: {joined}").into());
    }
    resp.data
        .and_then(|d| d.characters)
        .ok_or_else(|| "response has no characters field".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let vars = QueryVariables {
            page: 2,
            status: "Alive".into(),
            species: "Human".into(),
        };
        let body = serde_json::to_value(GraphqlRequest::characters(&vars)).expect("serializes");
        assert_eq!(body["variables"]["page"], 2);
        assert_eq!(body["variables"]["status"], "Alive");
        assert_eq!(body["variables"]["species"], "Human");
        assert!(
            body["query"]
                .as_str()
                .is_some_and(|q| q.contains("characters(page: $page"))
        );
    }

    #[test]
    fn cache_key_distinguishes_every_variable() {
        let base = QueryVariables {
            page: 1,
            status: String::new(),
            species: String::new(),
        };
        let other_page = QueryVariables { page: 2, ..base.clone() };
        let other_status = QueryVariables {
            status: "dead".into(),
            ..base.clone()
        };
        let other_species = QueryVariables {
            species: "alien".into(),
            ..base.clone()
        };
        let keys = [
            base.cache_key(),
            other_page.cache_key(),
            other_status.cache_key(),
            other_species.cache_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(base.cache_key(), base.clone().cache_key());
    }

    #[test]
    fn decodes_character_page() {
        let body = r#"{"data":{"characters":{
            "info":{"pages":42,"next":2,"prev":null},
            "results":[{"id":"1","name":"Rick Sanchez","status":"Alive","species":"Human",
                "gender":"Male","image":"https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                "origin":{"name":"Earth (C-137)"}}]}}}"#;
        let page = decode_characters(body).expect("decodes");
        assert_eq!(page.info.pages, Some(42));
        assert_eq!(page.info.next, Some(2));
        assert_eq!(page.info.prev, None);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].origin.name, "Earth (C-137)");
    }

    #[test]
    fn empty_results_are_not_an_error() {
        let body = r#"{"data":{"characters":{"info":{"pages":0,"next":null,"prev":null},"results":[]}}}"#;
        let page = decode_characters(body).expect("decodes");
        assert!(page.results.is_empty());
    }

    #[test]
    fn graphql_errors_and_missing_data_fail() {
        let with_errors = r#"{"errors":[{"message":"There is nothing here"}],"data":{"characters":null}}"#;
        let err = decode_characters(with_errors).expect_err("errors reported");
        assert!(err.to_string().contains("There is nothing here"));

        assert!(decode_characters(r#"{"data":{"characters":null}}"#).is_err());
        assert!(decode_characters(r#"{"data":null}"#).is_err());
        assert!(decode_characters("<html>502</html>").is_err());
    }
}
