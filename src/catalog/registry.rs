//! The built-in attribute registry: every highlighter attribute the output
//! scheme knows about, with its parent, import scope and hard-coded defaults.
//!
//! Order matters: the builder consumes this list top to bottom and every
//! parent must appear before its children.

use crate::catalog::tree::AttrSpec;

/// The full attribute spec list, root first, in dependency order.
pub fn default_specs() -> Vec<AttrSpec> {
    let mut specs = vec![AttrSpec::root("TEXT")];

    // Editor, code-insight, console, diff, custom and debugger attributes
    // that only ever take their styling from the baseline scheme.
    for id in [
        "FOLDED_TEXT_ATTRIBUTES",
        "SEARCH_RESULT_ATTRIBUTES",
        "WRITE_SEARCH_RESULT_ATTRIBUTES",
        "IDENTIFIER_UNDER_CARET_ATTRIBUTES",
        "WRITE_IDENTIFIER_UNDER_CARET_ATTRIBUTES",
        "TEXT_SEARCH_RESULT_ATTRIBUTES",
        "INJECTED_LANGUAGE_FRAGMENT",
        "ERRORS_ATTRIBUTES",
        "WARNING_ATTRIBUTES",
        "GENERIC_SERVER_ERROR_OR_WARNING",
        "DUPLICATE_FROM_SERVER",
        "INFO_ATTRIBUTES",
        "NOT_USED_ELEMENT_ATTRIBUTES",
        "DEPRECATED_ATTRIBUTES",
        "HYPERLINK_ATTRIBUTES",
        "FOLLOWED_HYPERLINK_ATTRIBUTES",
        "TODO_DEFAULT_ATTRIBUTES",
        "CONSOLE_NORMAL_OUTPUT",
        "CONSOLE_ERROR_OUTPUT",
        "CONSOLE_USER_INPUT",
        "CONSOLE_SYSTEM_OUTPUT",
        "DIFF_MODIFIED",
        "DIFF_DELETED",
        "DIFF_INSERTED",
        "DIFF_CONFLICT",
        "CUSTOM_KEYWORD1_ATTRIBUTES",
        "CUSTOM_KEYWORD2_ATTRIBUTES",
        "CUSTOM_KEYWORD3_ATTRIBUTES",
        "CUSTOM_KEYWORD4_ATTRIBUTES",
        "BREAKPOINT_ATTRIBUTES",
        "EXECUTIONPOINT_ATTRIBUTES",
    ] {
        specs.push(AttrSpec::new(id, "TEXT"));
    }

    specs.extend([
        // Base highlighter
        AttrSpec::new("BAD_CHARACTER", "TEXT").scope("invalid"),
        AttrSpec::new("MATCHED_BRACE_ATTRIBUTES", "TEXT").bg(153, 204, 255),
        AttrSpec::new("UNMATCHED_BRACE_ATTRIBUTES", "TEXT").bg(255, 220, 220),
        // Code insight
        AttrSpec::new("LOCAL_VARIABLE_ATTRIBUTES", "TEXT"),
        AttrSpec::new("IMPLICIT_ANONYMOUS_CLASS_PARAMETER_ATTRIBUTES", "TEXT"),
        AttrSpec::new("INSTANCE_FIELD_ATTRIBUTES", "TEXT"),
        AttrSpec::new("STATIC_FIELD_ATTRIBUTES", "TEXT"),
        AttrSpec::new("STATIC_METHOD_ATTRIBUTES", "TEXT"),
        AttrSpec::new("PARAMETER_ATTRIBUTES", "TEXT"),
        AttrSpec::new("CLASS_NAME_ATTRIBUTES", "TEXT"),
        // Java syntax
        AttrSpec::new("JAVA_LINE_COMMENT", "TEXT").scope("comment.line"),
        AttrSpec::new("JAVA_BLOCK_COMMENT", "JAVA_LINE_COMMENT").scope("comment.block"),
        AttrSpec::new("JAVA_DOC_COMMENT", "JAVA_LINE_COMMENT").scope("comment.documentation"),
        AttrSpec::new("JAVA_KEYWORD", "TEXT").scope("keyword"),
        AttrSpec::new("JAVA_NUMBER", "TEXT").scope("constant.numeric"),
        AttrSpec::new("JAVA_STRING", "TEXT").scope("string"),
        AttrSpec::new("JAVA_OPERATION_SIGN", "TEXT").scope("keyword.operator"),
        AttrSpec::new("JAVA_PARENTH", "TEXT").scope("punctuation"),
        AttrSpec::new("JAVA_BRACKETS", "TEXT").scope("punctuation"),
        AttrSpec::new("JAVA_BRACES", "TEXT").scope("punctuation"),
        AttrSpec::new("JAVA_COMMA", "TEXT").scope("punctuation"),
        AttrSpec::new("JAVA_DOT", "TEXT").scope("punctuation"),
        AttrSpec::new("JAVA_SEMICOLON", "TEXT").scope("punctuation"),
        AttrSpec::new("JAVA_VALID_STRING_ESCAPE", "TEXT").scope("constant.character.escape"),
        AttrSpec::new("JAVA_INVALID_STRING_ESCAPE", "TEXT").scope("invalid"),
        AttrSpec::new("JAVA_DOC_TAG", "TEXT"),
        AttrSpec::new("JAVA_DOC_MARKUP", "TEXT"),
        // XML
        AttrSpec::new("XML_PROLOGUE", "TEXT"),
        AttrSpec::new("XML_COMMENT", "JAVA_BLOCK_COMMENT"),
        AttrSpec::new("XML_TAG", "TEXT").scope("meta.tag"),
        AttrSpec::new("XML_TAG_NAME", "TEXT").scope("entity.name.tag"),
        AttrSpec::new("XML_ATTRIBUTE_NAME", "TEXT").scope("entity.other.attribute-name"),
        AttrSpec::new("XML_ATTRIBUTE_VALUE", "TEXT").scope("string.quoted.double"),
        AttrSpec::new("XML_TAG_DATA", "TEXT"),
        AttrSpec::new("XML_ENTITY_REFERENCE", "TEXT").scope("constant.character.entity"),
        // HTML
        AttrSpec::new("HTML_COMMENT", "XML_COMMENT"),
        AttrSpec::new("HTML_TAG", "XML_TAG"),
        AttrSpec::new("HTML_TAG_NAME", "XML_TAG_NAME"),
        AttrSpec::new("HTML_ATTRIBUTE_NAME", "XML_ATTRIBUTE_NAME"),
        AttrSpec::new("HTML_ATTRIBUTE_VALUE", "XML_ATTRIBUTE_VALUE"),
        AttrSpec::new("HTML_ENTITY_REFERENCE", "XML_ENTITY_REFERENCE"),
        // Python
        AttrSpec::new("PY.KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("PY.STRING", "JAVA_STRING"),
        AttrSpec::new("PY.NUMBER", "JAVA_NUMBER"),
        AttrSpec::new("PY.LINE_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("PY.OPERATION_SIGN", "JAVA_OPERATION_SIGN"),
        AttrSpec::new("PY.PARENTHS", "JAVA_PARENTH"),
        AttrSpec::new("PY.BRACKETS", "JAVA_BRACKETS"),
        AttrSpec::new("PY.BRACES", "JAVA_BRACES"),
        AttrSpec::new("PY.COMMA", "JAVA_COMMA"),
        AttrSpec::new("PY.DOT", "JAVA_DOT"),
        AttrSpec::new("PY.DOC_COMMENT", "JAVA_DOC_COMMENT"),
        AttrSpec::new("PY.DECORATOR", "TEXT").scope("entity.name.function.decorator"),
        AttrSpec::new("PY.CLASS_DEFINITION", "TEXT").scope("entity.name.class"),
        AttrSpec::new("PY.FUNC_DEFINITION", "TEXT").scope("entity.name.function"),
        AttrSpec::new("PY.PREDEFINED_DEFINITION", "TEXT"),
        AttrSpec::new("PY.PREDEFINED_USAGE", "TEXT").scope("support.function"),
        AttrSpec::new("PY.BUILTIN_NAME", "TEXT").scope("support.function"),
        AttrSpec::new("PY.VALID_STRING_ESCAPE", "JAVA_VALID_STRING_ESCAPE"),
        AttrSpec::new("PY.INVALID_STRING_ESCAPE", "JAVA_INVALID_STRING_ESCAPE"),
        // Django templates
        AttrSpec::new("DJANGO_COMMENT", "HTML_COMMENT"),
        AttrSpec::new("DJANGO_TAG_NAME", "XML_TAG_NAME"),
        AttrSpec::new("DJANGO_ID", "XML_ATTRIBUTE_NAME"),
        AttrSpec::new("DJANGO_STRING_LITERAL", "XML_ATTRIBUTE_VALUE"),
        AttrSpec::new("DJANGO_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("DJANGO_NUMBER", "JAVA_NUMBER"),
        AttrSpec::new("DJANGO_TAG_START_END", "JAVA_BRACES"),
        AttrSpec::new("DJANGO_FILTER", "JAVA_BRACES").scope("support.function"),
        // GQL
        AttrSpec::new("GQL_STRING_LITERAL", "JAVA_STRING"),
        AttrSpec::new("GQL_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("GQL_INT_LITERAL", "JAVA_NUMBER"),
        AttrSpec::new("GQL_ID", "JAVA_NUMBER"),
        // Buildout config
        AttrSpec::new("BUILDOUT.SECTION_NAME", "JAVA_NUMBER"),
        AttrSpec::new("BUILDOUT.KEY", "JAVA_KEYWORD"),
        AttrSpec::new("BUILDOUT.VALUE", "JAVA_STRING"),
        AttrSpec::new("BUILDOUT.LINE_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("BUILDOUT.KEY_VALUE_SEPARATOR", "JAVA_OPERATION_SIGN"),
        // Gettext locale files
        AttrSpec::new("LOCALE.LINE_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("LOCALE.MSGCTXT_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("LOCALE.MSGID_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("LOCALE.MSGID_PLURAL_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("LOCALE.MSGSTR_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("LOCALE.MSGSTR_PLURAL_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("LOCALE.STRING_LITERAL", "JAVA_STRING"),
        // reStructuredText
        AttrSpec::new("REST.LINE_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("REST.SECTION.HEADER", "JAVA_NUMBER"),
        AttrSpec::new("REST.BOLD", "TEXT").font(1),
        AttrSpec::new("REST.ITALIC", "TEXT").font(2),
        AttrSpec::new("REST.FIXED", "TEXT").bg(217, 217, 240),
        AttrSpec::new("REST.INTERPRETED", "TEXT").bg(202, 218, 186),
        AttrSpec::new("REST.REF.NAME", "JAVA_STRING"),
        AttrSpec::new("REST.EXPLICIT", "JAVA_KEYWORD"),
        AttrSpec::new("REST.FIELD", "JAVA_KEYWORD"),
        AttrSpec::new("REST.INLINE", "TEXT").bg(237, 252, 237),
        // SQL
        AttrSpec::new("SQL_BAD_CHARACTER", "BAD_CHARACTER"),
        AttrSpec::new("SQL_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("SQL_IDENT_DELIMITED", "TEXT"),
        AttrSpec::new("SQL_IDENT", "TEXT"),
        AttrSpec::new("SQL_SEMICOLON", "JAVA_SEMICOLON"),
        AttrSpec::new("SQL_COMMA", "JAVA_COMMA"),
        AttrSpec::new("SQL_DOT", "JAVA_DOT"),
        AttrSpec::new("SQL_STRING", "JAVA_STRING"),
        AttrSpec::new("SQL_PARENS", "JAVA_PARENTH"),
        AttrSpec::new("SQL_BRACKETS", "JAVA_BRACKETS"),
        AttrSpec::new("SQL_BRACES", "JAVA_BRACES"),
        AttrSpec::new("SQL_NUMBER", "JAVA_NUMBER"),
        AttrSpec::new("SQL_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("SQL_PROCEDURE", "STATIC_METHOD_ATTRIBUTES"),
        AttrSpec::new("SQL_PARAMETER", "PARAMETER_ATTRIBUTES"),
        AttrSpec::new("SQL_LOCAL_ALIAS", "LOCAL_VARIABLE_ATTRIBUTES"),
        AttrSpec::new("SQL_TABLE", "CLASS_NAME_ATTRIBUTES"),
        AttrSpec::new("SQL_COLUMN", "INSTANCE_FIELD_ATTRIBUTES"),
        AttrSpec::new("SQL_SCHEMA", "CLASS_NAME_ATTRIBUTES"),
        AttrSpec::new("SQL_DATABASE_OBJECT", "CLASS_NAME_ATTRIBUTES"),
        AttrSpec::new("SQL_SYNTETIC_ENTITY", "IMPLICIT_ANONYMOUS_CLASS_PARAMETER_ATTRIBUTES"),
        // Regular expressions
        AttrSpec::new("REGEXP.META", "JAVA_KEYWORD"),
        AttrSpec::new("REGEXP.INVALID_STRING_ESCAPE", "JAVA_INVALID_STRING_ESCAPE"),
        AttrSpec::new("REGEXP.BAD_CHARACTER", "BAD_CHARACTER"),
        AttrSpec::new("REGEXP.REDUNDANT_ESCAPE", "JAVA_VALID_STRING_ESCAPE"),
        AttrSpec::new("REGEXP.PARENTHS", "JAVA_PARENTH"),
        AttrSpec::new("REGEXP.BRACES", "JAVA_BRACES"),
        AttrSpec::new("REGEXP.BRACKETS", "JAVA_BRACKETS"),
        AttrSpec::new("REGEXP.COMMA", "JAVA_COMMA"),
        AttrSpec::new("REGEXP.ESC_CHARACTER", "JAVA_VALID_STRING_ESCAPE"),
        AttrSpec::new("REGEXP.CHAR_CLASS", "JAVA_VALID_STRING_ESCAPE"),
        AttrSpec::new("REGEXP.QUOTE_CHARACTER", "JAVA_VALID_STRING_ESCAPE"),
        AttrSpec::new("REGEXP.COMMENT", "JAVA_LINE_COMMENT"),
        // CSS
        AttrSpec::new("CSS.IDENT", "HTML_TAG_NAME").scope("meta.selector.css"),
        AttrSpec::new("CSS.COMMENT", "HTML_COMMENT"),
        AttrSpec::new("CSS.PROPERTY_NAME", "HTML_ATTRIBUTE_NAME").scope("support.type.property-name"),
        AttrSpec::new("CSS.PROPERTY_VALUE", "HTML_ATTRIBUTE_VALUE"),
        AttrSpec::new("CSS.TAG_NAME", "HTML_TAG_NAME"),
        AttrSpec::new("CSS.STRING", "JAVA_STRING"),
        AttrSpec::new("CSS.NUMBER", "JAVA_NUMBER").scope("constant.numeric.css"),
        AttrSpec::new("CSS.KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("CSS.FUNCTION", "HTML_TAG_NAME"),
        AttrSpec::new("CSS.URL", "HTML_ATTRIBUTE_VALUE"),
        // LESS
        AttrSpec::new("LESS_VARIABLE", "TEXT").fg(104, 12, 122).font(1),
        // SASS
        AttrSpec::new("SASS_RULE", "JAVA_KEYWORD"),
        AttrSpec::new("SASS_ATTRIBUTE", "JAVA_KEYWORD"),
        AttrSpec::new("SASS_CONSTANT", "JAVA_KEYWORD").scope("constant").fg(128, 0, 128).font(1),
        AttrSpec::new("SASS_STRING", "JAVA_STRING"),
        AttrSpec::new("SASS_DIRECTIVE", "JAVA_KEYWORD").fg(0, 0, 255),
        AttrSpec::new("SASS_MIXIN", "JAVA_KEYWORD").fg(0, 128, 128),
        AttrSpec::new("SASS_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("SASS_NUMBER", "JAVA_NUMBER"),
        // JavaScript
        AttrSpec::new("JS.KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("JS.STRING", "JAVA_STRING"),
        AttrSpec::new("JS.NUMBER", "JAVA_NUMBER"),
        AttrSpec::new("JS.REGEXP", "TEXT").scope("string.regexp"),
        AttrSpec::new("JS.LINE_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("JS.BLOCK_COMEMNT", "JAVA_BLOCK_COMMENT"),
        AttrSpec::new("JS.DOC_COMMENT", "JAVA_DOC_COMMENT"),
        AttrSpec::new("JS.OPERATION_SIGN", "JAVA_OPERATION_SIGN"),
        AttrSpec::new("JS.PARENTHS", "JAVA_PARENTH"),
        AttrSpec::new("JS.BRACKETS", "JAVA_BRACKETS"),
        AttrSpec::new("JS.BRACES", "JAVA_BRACES"),
        AttrSpec::new("JS.COMMA", "JAVA_COMMA"),
        AttrSpec::new("JS.DOT", "JAVA_DOT"),
        AttrSpec::new("JS.SEMICOLON", "JAVA_SEMICOLON"),
        AttrSpec::new("JS.BADCHARACTER", "BAD_CHARACTER"),
        AttrSpec::new("JS.DOC_TAG", "JAVA_DOC_TAG"),
        AttrSpec::new("JS.DOC_MARKUP", "JAVA_DOC_MARKUP"),
        AttrSpec::new("JS.VALID_STRING_ESCAPE", "JAVA_VALID_STRING_ESCAPE"),
        AttrSpec::new("JS.INVALID_STRING_ESCAPE", "JAVA_INVALID_STRING_ESCAPE"),
        AttrSpec::new("JS.LOCAL_VARIABLE", "TEXT").fg(69, 131, 131),
        AttrSpec::new("JS.PARAMETER", "TEXT").effect(1).scope("variable.parameter"),
        AttrSpec::new("JS.INSTANCE_MEMBER_VARIABLE", "INSTANCE_FIELD_ATTRIBUTES"),
        AttrSpec::new("JS.STATIC_MEMBER_VARIABLE", "STATIC_FIELD_ATTRIBUTES"),
        AttrSpec::new("JS.GLOBAL_VARIABLE", "STATIC_FIELD_ATTRIBUTES"),
        AttrSpec::new("JS.GLOBAL_FUNCTION", "STATIC_METHOD_ATTRIBUTES"),
        AttrSpec::new("JS.STATIC_MEMBER_FUNCTION", "STATIC_METHOD_ATTRIBUTES"),
        AttrSpec::new("JS.INSTANCE_MEMBER_FUNCTION", "TEXT").fg(122, 122, 43),
        AttrSpec::new("JS.ATTRIBUTE", "TEXT").bg(247, 233, 233),
        // PHP
        AttrSpec::new("PHP_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("PHP_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("PHP_DOC_COMMENT_ID", "JAVA_DOC_COMMENT"),
        AttrSpec::new("PHP_HEREDOC_ID", "JAVA_DOC_TAG"),
        AttrSpec::new("PHP_NUMBER", "JAVA_NUMBER"),
        AttrSpec::new("PHP_STRING", "JAVA_STRING"),
        AttrSpec::new("PHP_EXEC_COMMAND_ID", "JAVA_STRING").bg(227, 252, 255),
        AttrSpec::new("PHP_ESCAPE_SEQUENCE", "JAVA_VALID_STRING_ESCAPE"),
        AttrSpec::new("PHP_OPERATION_SIGN", "JAVA_OPERATION_SIGN"),
        AttrSpec::new("PHP_BRACKETS", "JAVA_BRACKETS"),
        AttrSpec::new("PHP_PREDEFINED SYMBOL", "TEXT"),
        AttrSpec::new("PHP_BAD_CHARACTER", "BAD_CHARACTER"),
        AttrSpec::new("PHP_HEREDOC_CONTENT", "JAVA_STRING"),
        AttrSpec::new("PHP_IDENTIFIER", "TEXT"),
        AttrSpec::new("PHP_CONSTANT", "PHP_IDENTIFIER").scope("constant"),
        AttrSpec::new("PHP_VAR", "JAVA_KEYWORD").fg(102, 0, 0),
        AttrSpec::new("PHP_COMMA", "JAVA_COMMA"),
        AttrSpec::new("PHP_SEMICOLON", "JAVA_SEMICOLON"),
        AttrSpec::new("PHP_DOC_TAG", "JAVA_DOC_TAG"),
        AttrSpec::new("PHP_MARKUP_ID", "JAVA_DOC_MARKUP"),
        AttrSpec::new("PHP_SCRIPTING_BACKGROUND", "TEXT").bg(247, 250, 255),
        AttrSpec::new("PHP_TAG", "JAVA_KEYWORD").fg(0, 0, 102),
        // Smarty
        AttrSpec::new("SMARTY_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("SMARTY_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("SMARTY_NUMBER", "JAVA_NUMBER"),
        AttrSpec::new("SMARTY_STRING", "JAVA_STRING"),
        AttrSpec::new("SMARTY_OPERATION_SIGN", "JAVA_OPERATION_SIGN"),
        AttrSpec::new("SMARTY_BRACKETS", "JAVA_BRACKETS"),
        AttrSpec::new("SMARTY_BAD_CHARACTER", "BAD_CHARACTER"),
        AttrSpec::new("SMARTY_IDENTIFIER", "TEXT"),
        AttrSpec::new("SMARTY_BACKGROUND", "TEXT").bg(247, 250, 255),
        // Twig
        AttrSpec::new("TWIG_BAD_CHARACTER", "BAD_CHARACTER"),
        AttrSpec::new("TWIG_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("TWIG_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("TWIG_NUMBER", "JAVA_NUMBER"),
        AttrSpec::new("TWIG_STRING", "JAVA_STRING"),
        AttrSpec::new("TWIG_OPERATION_SIGN", "JAVA_OPERATION_SIGN"),
        AttrSpec::new("TWIG_BRACKETS", "JAVA_BRACKETS"),
        AttrSpec::new("TWIG_IDENTIFIER", "TEXT"),
        AttrSpec::new("TWIG_BACKGROUND", "TEXT").bg(247, 250, 255),
        // Apache config
        AttrSpec::new("APACHE_CONFIG.COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("APACHE_CONFIG.ARG_LEXEM", "JAVA_STRING"),
        AttrSpec::new("APACHE_CONFIG.IDENTIFIER", "JAVA_KEYWORD"),
        // YAML
        AttrSpec::new("YAML_SCALAR_KEY", "JAVA_KEYWORD"),
        AttrSpec::new("YAML_SCALAR_VALUE", "TEXT"),
        AttrSpec::new("YAML_SCALAR_STRING", "TEXT").fg(0, 128, 128).font(1),
        AttrSpec::new("YAML_SCALAR_DSTRING", "TEXT").fg(0, 128, 0).font(1),
        AttrSpec::new("YAML_SCALAR_LIST", "TEXT").bg(218, 233, 246),
        AttrSpec::new("YAML_TEXT", "TEXT"),
        AttrSpec::new("YAML_SIGN", "JAVA_OPERATION_SIGN"),
        // Ruby
        AttrSpec::new("RUBY_KEYWORD", "JAVA_KEYWORD"),
        AttrSpec::new("RUBY_COMMENT", "JAVA_LINE_COMMENT"),
        AttrSpec::new("RUBY_HEREDOC_ID", "TEXT").scope("string.quoted.double.ruby"),
        AttrSpec::new("RUBY_NUMBER", "JAVA_NUMBER"),
        AttrSpec::new("RUBY_STRING", "JAVA_STRING"),
        AttrSpec::new("RUBY_ESCAPE_SEQUENCE", "JAVA_VALID_STRING_ESCAPE"),
        AttrSpec::new("RUBY_INVALID_ESCAPE_SEQUENCE", "JAVA_INVALID_STRING_ESCAPE"),
        AttrSpec::new("RUBY_OPERATION_SIGN", "JAVA_OPERATION_SIGN"),
        AttrSpec::new("RUBY_BRACKETS", "JAVA_BRACKETS"),
        AttrSpec::new("RUBY_EXPR_IN_STRING", "JAVA_STRING").scope("string source"),
        AttrSpec::new("RUBY_BAD_CHARACTER", "TEXT").scope("invalid"),
        AttrSpec::new("RUBY_REGEXP", "JAVA_STRING").scope("string.regexp"),
        AttrSpec::new("RUBY_WORDS", "JAVA_STRING"),
        AttrSpec::new("RUBY_HEREDOC_CONTENT", "JAVA_STRING").scope("string.unquoted"),
        AttrSpec::new("RUBY_IDENTIFIER", "TEXT").scope("variable"),
        AttrSpec::new("RUBY_METHOD_NAME", "RUBY_IDENTIFIER").scope("entity.name.function"),
        AttrSpec::new("RUBY_CONSTANT", "RUBY_IDENTIFIER").scope("constant"),
        AttrSpec::new("RUBY_GVAR", "RUBY_IDENTIFIER").scope("variable.other.readwrite.global"),
        AttrSpec::new("RUBY_CVAR", "RUBY_IDENTIFIER").scope("variable.other.readwrite.class"),
        AttrSpec::new("RUBY_IVAR", "RUBY_IDENTIFIER").scope("variable.other.readwrite.instance"),
        AttrSpec::new("RUBY_NTH_REF", "TEXT"),
        AttrSpec::new("RUBY_COMMA", "JAVA_COMMA"),
        AttrSpec::new("RUBY_SEMICOLON", "JAVA_SEMICOLON"),
        AttrSpec::new("RUBY_HASH_ASSOC", "JAVA_OPERATION_SIGN").scope("punctuation.separator.key-value"),
        AttrSpec::new("RUBY_LINE_CONTINUATION", "JAVA_OPERATION_SIGN"),
        AttrSpec::new("RUBY_LOCAL_VAR_ID", "RUBY_IDENTIFIER"),
        AttrSpec::new("RUBY_PARAMETER_ID", "RUBY_IDENTIFIER").scope("variable.parameter"),
        AttrSpec::new("RUBY_SYMBOL", "RUBY_IDENTIFIER").scope("constant.other.symbol"),
        AttrSpec::new("RUBY_SPECIFIC_CALL", "RUBY_IDENTIFIER").scope("storage"),
        AttrSpec::new("RUBY_PARAMDEF_CALL", "RUBY_IDENTIFIER").scope("support.function"),
        // HAML
        AttrSpec::new("HAML_TEXT", "TEXT").scope("text.haml"),
        AttrSpec::new("HAML_TAG", "HAML_TEXT").scope("meta.tag.haml"),
        AttrSpec::new("HAML_CLASS", "HAML_TEXT").scope("entity.name.tag.class.haml"),
        AttrSpec::new("HAML_ID", "HAML_TEXT").scope("entity.name.tag.id.haml"),
        AttrSpec::new("HAML_COMMENT", "JAVA_LINE_COMMENT").scope("comment.line.slash.haml"),
        AttrSpec::new("HAML_XHTML", "HAML_TEXT").scope("meta.prolog.haml"),
        AttrSpec::new("HAML_RUBY_CODE", "HAML_TEXT").scope("source.ruby.embedded.haml").ignore_fg(),
        AttrSpec::new("HAML_RUBY_START", "HAML_TEXT").scope("meta.line.ruby.haml"),
        AttrSpec::new("HAML_LINE_CONTINUATION", "HAML_TEXT"),
        AttrSpec::new("HAML_FILTER", "HAML_TEXT"),
        AttrSpec::new("HAML_FILTER_CONTENT", "HAML_TEXT"),
        // Cucumber (Gherkin)
        AttrSpec::new("GHERKIN_TEXT", "TEXT").scope("text.cucumber.feature"),
        AttrSpec::new("GHERKIN_COMMENT", "JAVA_LINE_COMMENT").scope("comment.line.number-sign"),
        AttrSpec::new("GHERKIN_KEYWORD", "JAVA_KEYWORD").scope("keyword.language.cucumber.feature"),
        AttrSpec::new("GHERKIN_TAG", "GHERKIN_KEYWORD").scope("storage.type.tag.cucumber"),
        AttrSpec::new("GHERKIN_PYSTRING", "JAVA_STRING").scope("string.quoted.single"),
        AttrSpec::new("GHERKIN_TABLE_HEADER_CELL", "GHERKIN_PYSTRING").scope("variable.other"),
        AttrSpec::new("GHERKIN_TABLE_CELL", "GHERKIN_PYSTRING").scope("source.cucumber"),
        AttrSpec::new("PIPE", "JAVA_SEMICOLON").scope("keyword.control.cucumber.table"),
        AttrSpec::new("GHERKIN_OUTLINE_PARAMETER_SUBSTITUTION", "GHERKIN_PYSTRING").scope("variable.other"),
        AttrSpec::new("GHERKIN_REGEXP_PARAMETER", "GHERKIN_PYSTRING").scope("string.quoted.double"),
        // CoffeeScript
        AttrSpec::new("COFFEESCRIPT.BLOCK_COMMENT", "JAVA_BLOCK_COMMENT").scope("comment.block.coffee"),
        AttrSpec::new("COFFEESCRIPT.LINE_COMMENT", "JAVA_BLOCK_COMMENT").scope("comment.line.coffee"),
        AttrSpec::new("COFFEESCRIPT.BAD_CHARACTER", "BAD_CHARACTER"),
        AttrSpec::new("COFFEESCRIPT.SEMICOLON", "JAVA_SEMICOLON").scope("punctuation.terminator.statement.coffee"),
        AttrSpec::new("COFFEESCRIPT.COMMA", "JAVA_COMMA").scope("meta.delimiter.object.comma.coffee"),
        AttrSpec::new("COFFEESCRIPT.DOT", "JAVA_DOT").scope("meta.delimiter.method.period.coffee"),
        AttrSpec::new("COFFEESCRIPT.CLASS_NAME", "TEXT").scope("entity.name.function.coffee"),
        AttrSpec::new("COFFEESCRIPT.IDENTIFIER", "TEXT").scope("source.coffee").ignore_bg(),
        AttrSpec::new("COFFEESCRIPT.FUNCTION_NAME", "TEXT").scope("entity.name.function.coffee"),
        AttrSpec::new("COFFEESCRIPT.OBJECT_KEY", "TEXT").scope("variable.assignment.coffee"),
        AttrSpec::new("COFFEESCRIPT.NUMBER", "JAVA_NUMBER").scope("constant.numeric.coffee"),
        AttrSpec::new("COFFEESCRIPT.BOOLEAN", "JAVA_KEYWORD").scope("constant.language.boolean"),
        AttrSpec::new("COFFEESCRIPT.STRING_LITERAL", "JAVA_STRING").scope("punctuation.definition.string.begin.coffee"),
        AttrSpec::new("COFFEESCRIPT.STRING", "JAVA_STRING").scope("string.quoted.single.coffee"),
        AttrSpec::new("COFFEESCRIPT.HEREDOC_ID", "JAVA_STRING").scope("punctuation.definition.string.begin.coffee"),
        AttrSpec::new("COFFEESCRIPT.HEREDOC_CONTENT", "JAVA_STRING").scope("string.quoted.double.heredoc.coffee"),
        AttrSpec::new("COFFEESCRIPT.HEREGEX_ID", "JAVA_STRING").scope("string.regexp.coffee"),
        AttrSpec::new("COFFEESCRIPT.HEREGEX_CONTENT", "JAVA_STRING").scope("string.regexp.coffee"),
        AttrSpec::new("COFFEESCRIPT.JAVASCRIPT_ID", "JAVA_STRING").scope("punctuation.definition.string.begin.coffee"),
        AttrSpec::new("COFFEESCRIPT.EXPRESSIONS_SUBSTITUTION_MARK", "TEXT").scope("punctuation.section.embedded.coffee"),
        AttrSpec::new("COFFEESCRIPT.PARENTHESIS", "JAVA_PARENTH").scope("meta.brace.round.coffee"),
        AttrSpec::new("COFFEESCRIPT.BRACKET", "JAVA_BRACKETS").scope("meta.brace.square.coffee"),
        AttrSpec::new("COFFEESCRIPT.BRACE", "JAVA_BRACES").scope("meta.brace.curly.coffee"),
        AttrSpec::new("COFFEESCRIPT.OPERATIONS", "TEXT").scope("keyword.operator.coffee"),
        AttrSpec::new("COFFEESCRIPT.EXISTENTIAL", "TEXT").scope("keyword.operator.coffee"),
        AttrSpec::new("COFFEESCRIPT.KEYWORD", "JAVA_KEYWORD").scope("keyword.control.coffee"),
        AttrSpec::new("COFFEESCRIPT.RANGE", "JAVA_DOT").scope("meta.delimiter.method.period.coffee"),
        AttrSpec::new("COFFEESCRIPT.SPLAT", "JAVA_DOT").scope("meta.delimiter.method.period.coffee"),
        AttrSpec::new("COFFEESCRIPT.THIS", "JAVA_KEYWORD").scope("variable.language.coffee"),
        AttrSpec::new("COFFEESCRIPT.COLON", "JAVA_SEMICOLON").scope("keyword.operator.coffee"),
        AttrSpec::new("COFFEESCRIPT.PROTOTYPE", "TEXT").scope("entity.name.function.coffee"),
        AttrSpec::new("COFFEESCRIPT.FUNCTION", "JAVA_NUMBER").scope("storage.type.function.coffee"),
        AttrSpec::new("COFFEESCRIPT.FUNCTION_BINDING", "JAVA_NUMBER").scope("storage.type.function.coffee"),
        AttrSpec::new("COFFEESCRIPT.REGULAR_EXPRESSION_ID", "JAVA_STRING").scope("string.regexp.coffee"),
        AttrSpec::new("COFFEESCRIPT.REGULAR_EXPRESSION_CONTENT", "JAVA_STRING").scope("string.regexp.coffee"),
        AttrSpec::new("COFFEESCRIPT.REGULAR_EXPRESSION_FLAG", "JAVA_STRING").scope("string.regexp.coffee"),
        AttrSpec::new("COFFEESCRIPT.ESCAPE_SEQUENCE", "JAVA_VALID_STRING_ESCAPE").scope("constant.character.escape.coffe"),
        AttrSpec::new("COFFEESCRIPT.JAVASCRIPT_CONTENT", "JAVA_STRING").scope("string.quoted.script.coffee").ignore_fg(),
        // ERB ("text.html.ruby"); the host-markup attributes hang off XML_TAG.
        AttrSpec::new("RHTML_SCRIPTLET_START_ID", "XML_TAG").scope("punctuation.section.embedded.ruby"),
        AttrSpec::new("RHTML_SCRIPTLET_END_ID", "XML_TAG").scope("punctuation.section.embedded.ruby"),
        AttrSpec::new("RHTML_EXPRESSION_START_ID", "XML_TAG").scope("punctuation.section.embedded.ruby"),
        AttrSpec::new("RHTML_EXPRESSION_END_ID", "XML_TAG").scope("punctuation.section.embedded.ruby"),
        AttrSpec::new("RHTML_COMMENT_ID", "JAVA_LINE_COMMENT").scope("comment.block.erb"),
        AttrSpec::new("RHTML_OMIT_NEW_LINE_ID", "XML_TAG").scope("punctuation.section.embedded.ruby"),
        AttrSpec::new("RHTML_SCRIPTING_BACKGROUND_ID", "XML_TAG").scope("source.ruby.rails.embedded.html").ignore_fg(),
        // Custom file types
        AttrSpec::new("CUSTOM_NUMBER_ATTRIBUTES", "JAVA_NUMBER"),
        AttrSpec::new("CUSTOM_STRING_ATTRIBUTES", "JAVA_STRING"),
        AttrSpec::new("CUSTOM_LINE_COMMENT_ATTRIBUTES", "JAVA_LINE_COMMENT"),
        AttrSpec::new("CUSTOM_MULTI_LINE_COMMENT_ATTRIBUTES", "JAVA_DOC_COMMENT"),
        AttrSpec::new("CUSTOM_VALID_STRING_ESCAPE_ATTRIBUTES", "JAVA_VALID_STRING_ESCAPE"),
        AttrSpec::new("CUSTOM_INVALID_STRING_ESCAPE_ATTRIBUTES", "JAVA_INVALID_STRING_ESCAPE"),
    ]);

    specs
}
