use std::fmt::Write;

pub const SIMPLE_QUERY: &str = "query Hero { hero { name } }";

pub const COMPLEX_QUERY: &str = r#"
query HeroDetails($episode: Episode = JEDI, $withFriends: Boolean!, $first: Int = 10) {
  hero(episode: $episode) {
    __typename
    id
    name
    ... on Droid @include(if: $withFriends) {
      primaryFunction
      friendsConnection(first: $first, filter: {kind: HUMAN, tags: ["a", "b"]}) {
        totalCount
        edges { cursor node { ...CharacterFields } }
        pageInfo { hasNextPage endCursor }
      }
    }
    ... on Human {
      height(unit: METER)
      starships { id name length(unit: FOOT) }
    }
  }
}

fragment CharacterFields on Character {
  id
  name
  appearsIn
  description: bio(format: """
    Multi-line
    block string
  """)
}
"#;

/// Generates a schema with `count` object types, each with a handful of
/// fields, arguments, and directives, plus one enum and input per type.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 400);
    out.push_str("schema { query: Type0 }\n\n");
    for i in 0..count {
        let next = (i + 1) % count.max(1);
        writeln!(out, "\"\"\"\nType number {i}.\n\"\"\"").unwrap();
        writeln!(out, "type Type{i} implements Node @key(fields: \"id\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        writeln!(out, "  \"The name.\"").unwrap();
        writeln!(out, "  name(locale: String = \"en\"): String").unwrap();
        writeln!(out, "  next(first: Int = 10, after: String): [Type{next}!]!").unwrap();
        writeln!(out, "  kind: Kind{i} @deprecated(reason: \"use name\")").unwrap();
        writeln!(out, "}}\n").unwrap();
        writeln!(out, "enum Kind{i} {{ ALPHA BETA GAMMA }}\n").unwrap();
        writeln!(out, "input Filter{i} {{ ids: [ID!] limit: Int = 25 ratio: Float = 0.5 }}\n")
            .unwrap();
    }
    out
}

pub mod operations;
