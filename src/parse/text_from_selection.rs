use scraper::{ElementRef, Selector};

use super::remove_excess_whitespace;

/// All text beneath `element`, whitespace-collapsed and trimmed.
/// Returns `None` when nothing but whitespace is left.
pub fn get_inner_text(element: ElementRef<'_>) -> Option<String> {
    let raw: String = element.text().collect();
    let text = remove_excess_whitespace(&raw);
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

/// Text of the first descendant of `element` matching `selector`.
pub fn text_from_selection(selector: &Selector, element: ElementRef<'_>) -> Option<String> {
    element.select(selector).next().and_then(get_inner_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_inner_text_joins_nested_nodes() {
        let doc = Html::parse_fragment("<li>  Grilled <b>Steak</b>\n  </li>");
        let li = doc
            .select(&Selector::parse("li").unwrap())
            .next()
            .unwrap();
        assert_eq!(get_inner_text(li).as_deref(), Some("Grilled Steak"));
    }

    #[test]
    fn test_blank_text_is_none() {
        let doc = Html::parse_fragment("<div><span> \n </span></div>");
        let div = doc
            .select(&Selector::parse("div").unwrap())
            .next()
            .unwrap();
        assert_eq!(text_from_selection(&Selector::parse("span").unwrap(), div), None);
        assert_eq!(text_from_selection(&Selector::parse("p").unwrap(), div), None);
    }
}
