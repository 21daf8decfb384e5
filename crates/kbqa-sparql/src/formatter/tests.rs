//! Unit tests for the SPARQL formatter

use super::*;

// ============================================================================
// FormatterConfig Tests
// ============================================================================

mod config_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.indent_width(), 4);
        assert_eq!(config.clause_padding(), 5);
        assert_eq!(config.keyword_casing(), KeywordCasing::FirstOccurrence);
    }

    #[test]
    fn test_config_builder_chaining() {
        let config = FormatterConfig::new()
            .with_indent_width(2)
            .with_clause_padding(3)
            .with_keyword_casing(KeywordCasing::EveryWord);

        assert_eq!(config.indent_width(), 2);
        assert_eq!(config.clause_padding(), 3);
        assert_eq!(config.keyword_casing(), KeywordCasing::EveryWord);
    }

    #[test]
    fn test_compact_preset() {
        let config = FormatterConfig::compact();
        assert_eq!(config.indent_width(), 2);
        assert_eq!(config.clause_padding(), 0);
    }

    #[test]
    fn test_config_serialization() {
        let config = FormatterConfig::default().with_keyword_casing(KeywordCasing::EveryWord);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"every-word\""));

        let deserialized: FormatterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: FormatterConfig = serde_json::from_str(r#"{"indent_width": 2}"#).unwrap();
        assert_eq!(config.indent_width(), 2);
        assert_eq!(config.clause_padding(), 5);
        assert_eq!(config.keyword_casing(), KeywordCasing::FirstOccurrence);
    }
}

// ============================================================================
// Keyword Tests
// ============================================================================

mod keyword_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_occurrence_only() {
        let result = uppercase_keywords("limit 1 limit 2", KeywordCasing::FirstOccurrence);
        assert_eq!(result, "LIMIT 1 limit 2");
    }

    #[test]
    fn test_every_word() {
        let result = uppercase_keywords("limit 1 limit 2", KeywordCasing::EveryWord);
        assert_eq!(result, "LIMIT 1 LIMIT 2");
    }

    #[test]
    fn test_offset_listed_twice() {
        let result = uppercase_keywords("offset 1 offset 2 offset 3", KeywordCasing::FirstOccurrence);
        assert_eq!(result, "OFFSET 1 OFFSET 2 offset 3");
    }

    #[test]
    fn test_first_occurrence_matches_inside_words() {
        let result = uppercase_keywords("?task", KeywordCasing::FirstOccurrence);
        assert_eq!(result, "?tASK");
    }

    #[test]
    fn test_every_word_skips_inside_words() {
        let result = uppercase_keywords("?task ?count", KeywordCasing::EveryWord);
        assert_eq!(result, "?task ?COUNT");
    }

    #[test]
    fn test_mixed_case_untouched() {
        for casing in [KeywordCasing::FirstOccurrence, KeywordCasing::EveryWord] {
            assert_eq!(uppercase_keywords("Select ?x Where", casing), "Select ?x Where");
        }
    }

    #[test]
    fn test_group_by() {
        let result = uppercase_keywords("group by ?x", KeywordCasing::FirstOccurrence);
        assert_eq!(result, "GROUP BY ?x");
    }

    #[test]
    fn test_keyword_list_is_uppercase() {
        for keyword in KEYWORDS {
            assert_eq!(*keyword, keyword.to_uppercase());
        }
    }
}

// ============================================================================
// Stage Tests
// ============================================================================

mod stage_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn apply(stage: Stage, text: &str) -> String {
        stage.apply(text, &FormatterConfig::default())
    }

    #[test]
    fn test_pipeline_order() {
        assert_eq!(Stage::PIPELINE.len(), 14);
        assert_eq!(Stage::PIPELINE[0], Stage::UppercaseKeywords);
        assert_eq!(Stage::PIPELINE[12], Stage::Indent);
        assert_eq!(Stage::PIPELINE[13], Stage::StripBlankLines);
    }

    #[test]
    fn test_stage_names() {
        assert_eq!(Stage::OrderBy.name(), "order_by");
        assert_eq!(Stage::StatementTerminator.name(), "statement_terminator");
        assert_eq!(Stage::StripBlankLines.to_string(), "strip_blank_lines");
    }

    #[test]
    fn test_open_brace() {
        assert_eq!(apply(Stage::OpenBrace, "WHERE  {  ?s"), "WHERE{\n?s");
    }

    #[test]
    fn test_close_brace() {
        assert_eq!(apply(Stage::CloseBrace, "?o  }  ."), "?o\n} .");
    }

    #[test]
    fn test_statement_terminator_spaced() {
        assert_eq!(
            apply(Stage::StatementTerminator, "?s ?p ?o . ?a ?b ?c"),
            "?s ?p ?o .\n ?a ?b ?c"
        );
        assert_eq!(apply(Stage::StatementTerminator, "?o. ?a"), "?o .\n?a");
    }

    #[test]
    fn test_statement_terminator_ignores_unspaced_dots() {
        let text = "<http://dbpedia.org/resource/Berlin> 1.5";
        assert_eq!(apply(Stage::StatementTerminator, text), text);
    }

    #[test]
    fn test_clause_separator() {
        assert_eq!(
            apply(Stage::ClauseSeparator, "?s a ?t; ?p ?o"),
            "?s a ?t ;\n     ?p ?o"
        );
    }

    #[test]
    fn test_clause_separator_custom_padding() {
        let config = FormatterConfig::default().with_clause_padding(0);
        assert_eq!(
            Stage::ClauseSeparator.apply("?s a ?t; ?p ?o", &config),
            "?s a ?t ;\n?p ?o"
        );
    }

    #[test]
    fn test_where() {
        assert_eq!(apply(Stage::Where, "?x   WHERE   {"), "?x\nWHERE {");
    }

    #[test]
    fn test_union() {
        assert_eq!(apply(Stage::Union, "}   UNION   {"), "} UNION {");
        assert_eq!(apply(Stage::Union, "}UNION{"), "} UNION {");
    }

    #[test]
    fn test_line_starting_keywords() {
        assert_eq!(apply(Stage::Limit, "} LIMIT 5"), "}\nLIMIT 5");
        assert_eq!(apply(Stage::OrderBy, "} ORDER BY ?x"), "}\nORDER BY ?x");
        assert_eq!(apply(Stage::GroupBy, "} GROUP BY ?x"), "}\nGROUP BY ?x");
        assert_eq!(
            apply(Stage::Having, "?x HAVING (COUNT(?y) > 1)"),
            "?x\nHAVING (COUNT(?y) > 1)"
        );
        assert_eq!(apply(Stage::Offset, "LIMIT 5 OFFSET 10"), "LIMIT 5\nOFFSET 10");
    }

    #[test]
    fn test_strip_blank_lines() {
        assert_eq!(apply(Stage::StripBlankLines, "a\n\n   \n b\n\t\nc"), "a\n b\nc");
        assert_eq!(strip_blank_lines(""), "");
    }
}

// ============================================================================
// Indent Tests
// ============================================================================

mod indent_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_level() {
        let indented = indent("{\na\n}", 4);
        assert_eq!(indented.text, "{\n    a\n}");
        assert_eq!(indented.depth, 0);
        assert_eq!(indented.clipped, 0);
    }

    #[test]
    fn test_nested_levels() {
        let indented = indent("{\n{\nx\n}\n}", 4);
        assert_eq!(indented.text, "{\n    {\n        x\n    }\n}");
        assert_eq!(indented.depth, 0);
    }

    #[test]
    fn test_custom_width() {
        assert_eq!(indent("{\na\n}", 2).text, "{\n  a\n}");
    }

    #[test]
    fn test_unbalanced_closer_is_clipped() {
        let indented = indent("a\n}", 4);
        assert_eq!(indented.text, "a}");
        assert_eq!(indented.depth, 0);
        assert_eq!(indented.clipped, 1);
    }

    #[test]
    fn test_open_brace_left_open() {
        let indented = indent("{\nx", 4);
        assert_eq!(indented.text, "{\n    x");
        assert_eq!(indented.depth, 1);
    }
}

// ============================================================================
// SparqlFormatter Tests
// ============================================================================

mod format_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BALANCED_QUERIES: &[&str] = &[
        "select ?x where { ?x a ?y . } limit 10",
        "select distinct ?x where { { ?x a ?y } union { ?x a ?z } } limit 5",
        "ask where { ?s ?p ?o ; ?q ?r . filter(?r > 1) }",
        "PREFIX dbo: <http://dbpedia.org/ontology/> SELECT ?b WHERE { ?b dbo:author ?a }",
    ];

    #[test]
    fn test_simple_select() {
        let formatted = format_query("select ?x where { ?x a ?y . } limit 10");
        assert_eq!(formatted, "SELECT ?x\nWHERE {\n    ?x a ?y .\n}\nLIMIT 10");
    }

    #[test]
    fn test_keywords_uppercased() {
        let formatted = format_query("select ?a where { ?a ?b ?c } limit 5");
        assert!(formatted.contains("SELECT"));
        assert!(formatted.contains("WHERE"));
        assert!(formatted.contains("LIMIT"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_query(""), "");
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(format_query("   \n  "), "");
    }

    #[test]
    fn test_clause_separator_alignment() {
        let formatted = format_query("select ?s where { ?s a ?t; ?p ?o . }");
        assert_eq!(
            formatted,
            "SELECT ?s\nWHERE {\n    ?s a ?t ;\n         ?p ?o .\n} "
        );
    }

    #[test]
    fn test_union_blocks() {
        let formatted =
            format_query("select distinct ?x where { { ?x a ?y } union { ?x a ?z } } limit 5");
        assert_eq!(
            formatted,
            "SELECT DISTINCT ?x\nWHERE {\n    {\n        ?x a ?y\n    } UNION {\n        ?x a ?z\n    } \n}\nLIMIT 5"
        );
    }

    #[test]
    fn test_qald_query() {
        let query = "PREFIX dbo: <http://dbpedia.org/ontology/> PREFIX dbr: <http://dbpedia.org/resource/> SELECT ?Almamater WHERE { dbr:Angela_Merkel dbo:almaMater ?Almamater }";
        let formatted = format_query(query);
        assert_eq!(
            formatted,
            "PREFIX dbo: <http://dbpedia.org/ontology/> PREFIX dbr: <http://dbpedia.org/resource/> SELECT ?Almamater\nWHERE {\n    dbr:Angela_Merkel dbo:almaMater ?Almamater\n} "
        );
    }

    #[test]
    fn test_custom_indent_width() {
        let config = FormatterConfig::default().with_indent_width(2);
        let formatted = format_query_with_config("select ?x where { ?x a ?y . } limit 10", config);
        assert_eq!(formatted, "SELECT ?x\nWHERE {\n  ?x a ?y .\n}\nLIMIT 10");
    }

    #[test]
    fn test_every_word_casing() {
        let query = "select ?x where { ?x ?p ?o filter(?o > 1) filter(?o < 5) }";

        let first = format_query(query);
        assert!(first.contains("FILTER(?o > 1)"));
        assert!(first.contains("filter(?o < 5)"));

        let config = FormatterConfig::default().with_keyword_casing(KeywordCasing::EveryWord);
        let every = format_query_with_config(query, config);
        assert!(!every.contains("filter"));
    }

    #[test]
    fn test_no_blank_lines() {
        for query in BALANCED_QUERIES.iter().chain(["{ a }  }", "a .\n\n. b", " ; ; "].iter()) {
            let formatted = format_query(query);
            for line in formatted.lines() {
                assert!(!line.trim().is_empty(), "blank line in {formatted:?}");
            }
        }
    }

    #[test]
    fn test_balanced_queries_return_to_depth_zero() {
        let formatter = SparqlFormatter::default();
        for query in BALANCED_QUERIES {
            let stages = formatter.format_stages(query);
            let before_indent = stages
                .iter()
                .find(|output| output.stage == Stage::Offset)
                .unwrap();
            let indented = indent(&before_indent.text, 4);
            assert_eq!(indented.depth, 0, "{query}");
            assert_eq!(indented.clipped, 0, "{query}");
        }
    }

    #[test]
    fn test_unbalanced_braces_do_not_fail() {
        let formatted = format_query("{ a }  }");
        assert_eq!(formatted, "{\n    a\n} } ");
    }

    #[test]
    fn test_not_idempotent() {
        let once = format_query("select ?x where { ?x a ?y . } limit 10");
        let twice = format_query(&once);

        // A second pass re-inserts breaks and indents the body again.
        assert_ne!(once, twice);
        assert_eq!(twice, "SELECT ?x\nWHERE {\n        ?x a ?y .\n} \nLIMIT 10");
    }

    #[test]
    fn test_format_stages_matches_format() {
        let formatter = SparqlFormatter::default();
        let query = BALANCED_QUERIES[1];
        let stages = formatter.format_stages(query);

        assert_eq!(stages.len(), Stage::PIPELINE.len());
        for (output, stage) in stages.iter().zip(Stage::PIPELINE) {
            assert_eq!(output.stage, stage);
        }
        assert_eq!(stages.last().unwrap().text, formatter.format(query));
    }

    #[test]
    fn test_crlf_becomes_lf() {
        assert_eq!(format_query("a\r\nb"), "a\nb");
    }

    #[test]
    fn test_format_stages_indent_matches_format_on_unbalanced_input() {
        let formatter = SparqlFormatter::default();
        let query = "{ a }  }";
        let stages = formatter.format_stages(query);
        let indented = stages
            .iter()
            .find(|output| output.stage == Stage::Indent)
            .unwrap();
        assert_eq!(indented.text, "{\n    a\n} } ");
        assert_eq!(stages.last().unwrap().text, formatter.format(query));
    }

    #[test]
    fn test_formatter_keeps_config() {
        let formatter = SparqlFormatter::new(FormatterConfig::compact());
        assert_eq!(formatter.config(), &FormatterConfig::compact());
    }
}
