//! Markup fixtures shaped like the upstream listings page.

/// Wrap list items in a page with a `ul.search-values` search form.
pub fn search_page(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|label| format!(r#"<li data-label="{label}"><span>{label}</span></li>"#))
        .collect();

    format!(
        r#"<!doctype html>
<html lang="nl">
<head><title>Te koop - IRRES</title></head>
<body>
  <nav><ul class="menu"><li data-label="Menu">Menu</li></ul></nav>
  <form class="search">
    <ul class="search-values">{items}</ul>
  </form>
  <main><div class="inner-container"><h2 class="estate-city">Antwerpen | Villa</h2></div></main>
</body>
</html>"#
    )
}
