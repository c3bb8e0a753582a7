//! Resaltado léxico de XML para el panel de metadata XMP.
//!
//! El resaltado solo agrega estilos: la concatenación de los fragmentos es
//! siempre idéntica al texto original.

use console::style;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenKind {
    Text,
    Markup,
    TagName,
    AttrName,
    AttrValue,
    Comment,
    Instruction,
}

pub fn tokenize(source: &str) -> Vec<(TokenKind, &str)> {
    let mut tokens = Vec::new();
    let mut rest = source;

    while !rest.is_empty() {
        let (kind, end) = if rest.starts_with("<!--") {
            let end = rest[4..].find("-->").map_or(rest.len(), |index| index + 7);
            (Some(TokenKind::Comment), end)
        } else if rest.starts_with("<?") {
            let end = rest[2..].find("?>").map_or(rest.len(), |index| index + 4);
            (Some(TokenKind::Instruction), end)
        } else if rest.starts_with('<') {
            let end = tag_end(rest);
            tokenize_tag(&rest[..end], &mut tokens);
            (None, end)
        } else {
            (Some(TokenKind::Text), rest.find('<').unwrap_or(rest.len()))
        };

        if let Some(kind) = kind {
            tokens.push((kind, &rest[..end]));
        }
        rest = &rest[end..];
    }

    tokens
}

/// Devuelve el texto con estilos de consola aplicados.
pub fn highlight_xml(source: &str) -> String {
    tokenize(source)
        .into_iter()
        .map(|(kind, text)| match kind {
            TokenKind::Text => text.to_string(),
            TokenKind::Markup => style(text).dim().to_string(),
            TokenKind::TagName => style(text).cyan().to_string(),
            TokenKind::AttrName => style(text).yellow().to_string(),
            TokenKind::AttrValue => style(text).green().to_string(),
            TokenKind::Comment | TokenKind::Instruction => style(text).dim().italic().to_string(),
        })
        .collect()
}

fn tag_end(tag: &str) -> usize {
    let mut quote = None;
    for (index, ch) in tag.char_indices() {
        match (quote, ch) {
            (None, '"' | '\'') => quote = Some(ch),
            (Some(open), _) if open == ch => quote = None,
            (None, '>') => return index + 1,
            _ => {}
        }
    }
    tag.len()
}

fn tokenize_tag<'a>(tag: &'a str, tokens: &mut Vec<(TokenKind, &'a str)>) {
    let mut push = |kind, text: &'a str| {
        if !text.is_empty() {
            tokens.push((kind, text));
        }
    };

    let open_len = if tag.starts_with("</") { 2 } else { 1 };
    let (open, body) = tag.split_at(open_len);
    push(TokenKind::Markup, open);

    let close_len = if body.ends_with("/>") {
        2
    } else if body.ends_with('>') {
        1
    } else {
        0
    };
    let (body, close) = body.split_at(body.len() - close_len);

    let name_end = body.find(char::is_whitespace).unwrap_or(body.len());
    push(TokenKind::TagName, &body[..name_end]);

    let mut attrs = &body[name_end..];
    while let Some(first) = attrs.chars().next() {
        let (kind, end) = if first.is_whitespace() {
            let end = attrs
                .find(|ch: char| !ch.is_whitespace())
                .unwrap_or(attrs.len());
            (TokenKind::Text, end)
        } else if first == '=' {
            (TokenKind::Markup, 1)
        } else if first == '"' || first == '\'' {
            let end = attrs[1..]
                .find(first)
                .map_or(attrs.len(), |index| index + 2);
            (TokenKind::AttrValue, end)
        } else {
            let end = attrs
                .find(|ch: char| ch.is_whitespace() || matches!(ch, '=' | '"' | '\''))
                .unwrap_or(attrs.len());
            (TokenKind::AttrName, end)
        };
        push(kind, &attrs[..end]);
        attrs = &attrs[end..];
    }

    push(TokenKind::Markup, close);
}
