use chrono::NaiveDate;
use serde::Serialize;

use super::RenderOptions;
use crate::config::SiteConfig;

#[derive(Serialize)]
struct HomeFrontMatter<'a> {
    layout: &'static str,
    title: &'a str,
    nav_order: u8,
    description: &'a str,
    permalink: &'static str,
}

#[derive(Serialize)]
struct PostFrontMatter<'a> {
    layout: &'static str,
    title: &'a str,
    date: String,
    categories: &'static str,
}

const HOMEPAGE_TEMPLATE: &str = r##"
# %TITLE%
{: .fs-9 }

%DESCRIPTION%
{: .fs-6 .fw-300 }

[Get Started](#getting-started){: .btn .btn-primary .fs-5 .mb-4 .mb-md-0 .mr-2 }
[View on GitHub](%REPOSITORY_URL%){: .btn .fs-5 .mb-4 .mb-md-0 }

---

## Getting Started

This website provides the documentation for %TITLE%, including:

- [Project Overview](/docs/overview/)
- [Component Documentation](/components/)
- [Design Standards](/standards/)
- [Development Process](/docs/process/)
- [Current Status](/docs/status/)

## Recent Updates

{% for post in site.posts limit:3 %}
- **{{ post.date | date: "%b %d, %Y" }}** - [{{ post.title }}]({{ post.url }})
{% endfor %}

---

Maintained by %AUTHOR%. Source code and issue tracker on [GitHub](%REPOSITORY_URL%).
"##;

const NOT_FOUND_TEMPLATE: &str = r##"---
layout: default
title: 404
permalink: /404.html
nav_exclude: true
search_exclude: true
---

# 404 - Page Not Found
{: .text-center .fs-9 }

The requested page could not be found.
{: .text-center .fs-6 .fw-300 }

[Return to Home]({{ site.baseurl }}){: .btn .btn-primary .fs-5 .mb-4 .mb-md-0 .mr-2 .text-center}

---

## Looking for something?

Here are some helpful links to get you back on track:

- [Project Overview]({{ site.baseurl }}/)
- [Documentation]({{ site.baseurl }}/docs/)
- [Components]({{ site.baseurl }}/components/)
- [%TITLE% on GitHub](%REPOSITORY_URL%)

If you believe this is a broken link, please [create an issue](%REPOSITORY_URL%/issues/new) on our GitHub repository.
"##;

const LAUNCH_POST_TEMPLATE: &str = r##"
Welcome to the new %TITLE% website! This site will serve as the central hub for documentation, component status, and development updates.

## What's Included

The website provides access to:

- Project documentation
- Component specifications
- Development standards
- Current project status
- Development blog

Stay tuned for more updates as the project develops!

---

— %AUTHOR%
"##;

/// Wraps `fields` in `---` fences.
fn front_matter(fields: &impl Serialize) -> Result<String, serde_yaml::Error> {
    Ok(format!("---\n{}---\n", serde_yaml::to_string(fields)?))
}

// Templates contain Liquid and kramdown braces, placeholders are written as `%NAME%`.
// Substituted values are never scanned again.
fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('%') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let placeholder = after.find('%').and_then(|end| {
            values
                .iter()
                .find(|(marker, _)| *marker == &after[..end])
                .map(|(_, value)| (*value, end))
        });

        match placeholder {
            Some((value, end)) => {
                output.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                output.push('%');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Renders the site's `index.md`.
pub fn render_homepage(
    config: &SiteConfig,
    _options: &RenderOptions,
) -> Result<String, serde_yaml::Error> {
    let repository_url = config.repository_url();

    let mut page = front_matter(&HomeFrontMatter {
        layout: "home",
        title: config.title(),
        nav_order: 1,
        description: config.description(),
        permalink: "/",
    })?;

    page.push_str(&interpolate(
        HOMEPAGE_TEMPLATE,
        &[
            ("TITLE", config.title()),
            ("DESCRIPTION", config.description()),
            ("REPOSITORY_URL", repository_url.as_str()),
            ("AUTHOR", config.author()),
        ],
    ));

    Ok(page)
}

/// Renders the site's `404.md`.
pub fn render_not_found_page(config: &SiteConfig, _options: &RenderOptions) -> String {
    let repository_url = config.repository_url();

    interpolate(
        NOT_FOUND_TEMPLATE,
        &[
            ("TITLE", config.title()),
            ("REPOSITORY_URL", repository_url.as_str()),
        ],
    )
}

/// Renders the sample "website launch" blog post dated `date`.
pub fn render_launch_post(config: &SiteConfig, date: NaiveDate) -> Result<String, serde_yaml::Error> {
    let title = format!("{} Website Launch", config.title());

    let mut post = front_matter(&PostFrontMatter {
        layout: "post",
        title: &title,
        date: date.format("%Y-%m-%d").to_string(),
        categories: "news",
    })?;

    post.push_str(&interpolate(
        LAUNCH_POST_TEMPLATE,
        &[("TITLE", config.title()), ("AUTHOR", config.author())],
    ));

    Ok(post)
}
