//! HTML for the chat page, rendered with Handlebars. Chat text comes
//! from users and the model so everything goes through the default
//! HTML escaping, no triple-stash.

use anyhow::Result;
use handlebars::Handlebars;

use super::public::PageContext;

const PAGE_TEMPLATE_NAME: &str = "page";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Converse AI</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🤯</text></svg>">
<style>
body { margin: 0; font-family: sans-serif; display: flex; min-height: 100vh; }
aside { width: 20rem; padding: 1.5rem; background: #f0f2f6; }
aside input[type=text] { width: 100%; box-sizing: border-box; padding: 0.5rem; }
main { flex: 1; padding: 1.5rem 3rem; }
.bubble { max-width: 48rem; margin: 0.5rem 0; padding: 0.75rem 1rem; border-radius: 0.75rem; white-space: pre-wrap; }
.bubble.human { background: #dbeafe; margin-left: auto; }
.bubble.assistant { background: #f3f4f6; }
.notice { padding: 0.75rem 1rem; background: #fee2e2; color: #991b1b; border-radius: 0.5rem; }
#thinking { display: none; color: #6b7280; }
</style>
</head>
<body>
<aside>
<form method="post" action="/" id="message-form">
<input type="hidden" name="session_id" value="{{session_id}}">
<label for="message">Your message: </label>
<input type="text" id="message" name="message" autofocus autocomplete="off">
</form>
<p id="thinking">Thinking...</p>
</aside>
<main>
<h2>Your own ChatGPT</h2>
{{#if notice}}
<div class="notice" role="alert">{{notice}}</div>
{{/if}}
{{#each bubbles}}
<div class="bubble {{role}}" id="{{key}}">{{text}}</div>
{{/each}}
</main>
<script>
document.getElementById("message-form").addEventListener("submit", function () {
  document.getElementById("thinking").style.display = "block";
});
</script>
</body>
</html>
"#;

/// Build the template registry. Done once when the app state is
/// created, not per request.
pub fn templates<'a>() -> Result<Handlebars<'a>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_template_string(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
    Ok(registry)
}

pub fn render_page(registry: &Handlebars, context: &PageContext) -> Result<String> {
    let html = registry.render(PAGE_TEMPLATE_NAME, context)?;
    Ok(html)
}
