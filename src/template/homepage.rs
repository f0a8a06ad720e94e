use super::{Patcher, Rendered, escape_html, escape_with_breaks, fragment, present};
use crate::types::homepage::{HomepageContent, Logo, PortfolioItem, TeamMember};

fragment!(HEADLINE1, r#"<h1 class="heading-style-xl">We Invest IN</h1>"#);
fragment!(HEADLINE2, r#"<h1 class="heading-style-xl">Bold Founders</h1>"#);
fragment!(
    HERO_DESCRIPTION,
    r#"<p class="text-size-small text-color-white text-align-center">Let&#x27;s journey together into[\s\S]*?industries with unbounded growth potential\.</p>"#
);

fragment!(LOGO_TITLE, r#"<h2 class="heading-style-h1">We understand<br />VCs are tough</h2>"#);
fragment!(
    LOGO_DESCRIPTION,
    r#"<p class="text-size-regular text-color-white">We are dedicated to finding the most tenacious[\s\S]*?and ambitious minds in four key industries\.</p>"#
);
fragment!(
    LOGO_BUTTON,
    r#"<div class="text-size-tiny text-style-allcaps">View Our Verticles</div>"#
);
fragment!(
    LOGOS_GRID,
    r#"<div id="w-node-_0b0c344d-7d3b-65b8-0fa5-2db7567289fa-ae360d93" class="home-logos-grid">[\s\S]*?</div>(\s*</div>\s*</div>\s*</div>)"#
);

fragment!(BENEFITS_TITLE, r#"<h2 class="heading-style-h1">We understand our founders</h2>"#);
fragment!(
    BENEFITS_DESCRIPTION,
    r#"<p class="text-size-regular dual-paragraph">Bold Capital is on a mission[\s\S]*?massive growth potential\.</p>"#
);

fragment!(CARD1_NUMBER, r#"<div class="heading-style-h2">01</div>"#);
fragment!(CARD1_TITLE, r#"<h3 class="heading-style-h3">Pre-Seed</h3>"#);
fragment!(
    CARD1_DESCRIPTION,
    r#"<p class="text-size-small text-color-white">We invest at the pre-seed stage, providing[\s\S]*?next level\.\s*</p>"#
);
fragment!(CARD2_NUMBER, r#"<div class="heading-style-h2">02</div>"#);
fragment!(CARD2_TITLE, r#"<h3 class="heading-style-h3">Unicorns</h3>"#);
fragment!(
    CARD2_DESCRIPTION,
    r#"<p class="text-size-small text-color-white">Our portfolio companies have reached unicorn[\s\S]*?amount of equity\.</p>"#
);
fragment!(CARD3_NUMBER, r#"<div class="heading-style-h2">03</div>"#);
fragment!(CARD3_TITLE, r#"<h3 class="heading-style-h3">Process</h3>"#);
fragment!(
    CARD3_DESCRIPTION,
    r#"<p class="text-size-small text-color-white">Our transparent and open investment process[\s\S]*?in our process\.</p>"#
);
fragment!(CARD4_NUMBER, r#"<div class="heading-style-h2">04</div>"#);
fragment!(CARD4_TITLE, r#"<h3 class="heading-style-h3">\$400k\+</h3>"#);
fragment!(
    CARD4_DESCRIPTION,
    r#"<p class="text-size-small text-color-white">We&#x27;re passionate about helping founders[\s\S]*?\$400k\.</p>"#
);

fragment!(
    PORTFOLIO_TITLE,
    r#"<h2 class="heading-style-h1 text-align-center">Our investments are top-tier</h2>"#
);
fragment!(
    PORTFOLIO_DESCRIPTION,
    r#"<p class="text-size-small text-align-center">Most of our portfolio companies have achieved[\s\S]*?unicorn exits with our founders holding majority equity\.</p>"#
);
fragment!(
    PORTFOLIO_BUTTON,
    r#"<div class="text-size-tiny text-style-allcaps">View Our Portfolio</div>"#
);
fragment!(PORTFOLIO_IMAGE, r#"src="images/venture-008\.webp""#);
fragment!(
    PORTFOLIO_ITEMS,
    r#"<!-- Portfolio items will be dynamically generated by the backend -->"#
);

fragment!(TEAM_TITLE, r#"<h2 class="heading-style-h1">We found the<br />best tallent</h2>"#);
fragment!(
    TEAM_DESCRIPTION,
    r#"<p class="text-size-regular text-color-white">Our team is passionate about working with[\s\S]*?founders who break through barriers\.</p>"#
);
fragment!(
    TEAM_BUTTON,
    r#"<div class="text-size-tiny text-style-allcaps">Read our story</div>"#
);
fragment!(
    TEAM_MEMBERS,
    r#"<!-- Team members will be dynamically generated by the backend -->"#
);

/// Merge homepage content into the `index.html` template.
pub fn render_homepage(template: &str, content: &HomepageContent) -> Rendered {
    let mut p = Patcher::new(template);

    if let Some(hero) = &content.hero {
        if let Some(v) = present(&hero.headline1) {
            p.once(
                "hero.headline1",
                &HEADLINE1,
                &format!(r#"<h1 class="heading-style-xl">{}</h1>"#, escape_html(v)),
            );
        }
        if let Some(v) = present(&hero.headline2) {
            p.once(
                "hero.headline2",
                &HEADLINE2,
                &format!(r#"<h1 class="heading-style-xl">{}</h1>"#, escape_html(v)),
            );
        }
        if let Some(v) = present(&hero.description) {
            p.once(
                "hero.description",
                &HERO_DESCRIPTION,
                &format!(
                    r#"<p class="text-size-small text-color-white text-align-center">{}</p>"#,
                    escape_html(v)
                ),
            );
        }
    }

    if let Some(logo) = &content.logo_section {
        if let Some(v) = present(&logo.title) {
            p.once(
                "logoSection.title",
                &LOGO_TITLE,
                &format!(r#"<h2 class="heading-style-h1">{}</h2>"#, escape_with_breaks(v)),
            );
        }
        if let Some(v) = present(&logo.description) {
            p.once(
                "logoSection.description",
                &LOGO_DESCRIPTION,
                &format!(
                    r#"<p class="text-size-regular text-color-white">{}</p>"#,
                    escape_html(v)
                ),
            );
        }
        if let Some(v) = present(&logo.button_text) {
            p.all(
                "logoSection.buttonText",
                &LOGO_BUTTON,
                &button(v),
            );
        }
        if let Some(logos) = logo.logos.as_deref().filter(|l| !l.is_empty()) {
            let items = render_logos(logos);
            p.with("logoSection.logos", &LOGOS_GRID, |caps| {
                format!(
                    "<div id=\"w-node-_0b0c344d-7d3b-65b8-0fa5-2db7567289fa-ae360d93\" class=\"home-logos-grid\">{items}\n{}",
                    &caps[1]
                )
            });
        }
    }

    if let Some(benefits) = &content.benefits_section {
        if let Some(v) = present(&benefits.title) {
            p.once(
                "benefitsSection.title",
                &BENEFITS_TITLE,
                &format!(r#"<h2 class="heading-style-h1">{}</h2>"#, escape_html(v)),
            );
        }
        if let Some(v) = present(&benefits.description) {
            p.once(
                "benefitsSection.description",
                &BENEFITS_DESCRIPTION,
                &format!(
                    r#"<p class="text-size-regular dual-paragraph">{}</p>"#,
                    escape_html(v)
                ),
            );
        }
    }

    if let Some(cards) = &content.process_cards {
        let cards = cards.cards();
        if cards.len() >= 4 {
            let slots = [
                (&*CARD1_NUMBER, &*CARD1_TITLE, &*CARD1_DESCRIPTION),
                (&*CARD2_NUMBER, &*CARD2_TITLE, &*CARD2_DESCRIPTION),
                (&*CARD3_NUMBER, &*CARD3_TITLE, &*CARD3_DESCRIPTION),
                (&*CARD4_NUMBER, &*CARD4_TITLE, &*CARD4_DESCRIPTION),
            ];
            const FIELDS: [[&str; 3]; 4] = [
                ["processCards[0].number", "processCards[0].title", "processCards[0].description"],
                ["processCards[1].number", "processCards[1].title", "processCards[1].description"],
                ["processCards[2].number", "processCards[2].title", "processCards[2].description"],
                ["processCards[3].number", "processCards[3].title", "processCards[3].description"],
            ];
            for (i, (number_re, title_re, description_re)) in slots.into_iter().enumerate() {
                let card = cards[i];
                let [number_f, title_f, description_f] = FIELDS[i];
                p.once(
                    number_f,
                    number_re,
                    &format!(r#"<div class="heading-style-h2">{}</div>"#, escape_html(&card.number)),
                );
                p.once(
                    title_f,
                    title_re,
                    &format!(r#"<h3 class="heading-style-h3">{}</h3>"#, escape_html(&card.title)),
                );
                p.once(
                    description_f,
                    description_re,
                    &format!(
                        r#"<p class="text-size-small text-color-white">{}</p>"#,
                        escape_html(&card.description)
                    ),
                );
            }
        }
    }

    if let Some(portfolio) = &content.portfolio_section {
        if let Some(v) = present(&portfolio.title) {
            p.once(
                "portfolioSection.title",
                &PORTFOLIO_TITLE,
                &format!(
                    r#"<h2 class="heading-style-h1 text-align-center">{}</h2>"#,
                    escape_with_breaks(v)
                ),
            );
        }
        if let Some(v) = present(&portfolio.description) {
            p.once(
                "portfolioSection.description",
                &PORTFOLIO_DESCRIPTION,
                &format!(
                    r#"<p class="text-size-small text-align-center">{}</p>"#,
                    escape_html(v)
                ),
            );
        }
        if let Some(v) = present(&portfolio.button_text) {
            p.all("portfolioSection.buttonText", &PORTFOLIO_BUTTON, &button(v));
        }
        if let Some(v) = portfolio.image.as_deref().filter(|s| !s.is_empty()) {
            p.once(
                "portfolioSection.image",
                &PORTFOLIO_IMAGE,
                &format!(r#"src="{}""#, escape_html(v)),
            );
        }
        if let Some(items) = portfolio.portfolio_items.as_deref().filter(|l| !l.is_empty()) {
            p.once(
                "portfolioSection.portfolioItems",
                &PORTFOLIO_ITEMS,
                &render_portfolio_items(items),
            );
        }
    }

    if let Some(team) = &content.team_section {
        if let Some(v) = present(&team.title) {
            p.once(
                "teamSection.title",
                &TEAM_TITLE,
                &format!(r#"<h2 class="heading-style-h1">{}</h2>"#, escape_with_breaks(v)),
            );
        }
        if let Some(v) = present(&team.description) {
            p.once(
                "teamSection.description",
                &TEAM_DESCRIPTION,
                &format!(
                    r#"<p class="text-size-regular text-color-white">{}</p>"#,
                    escape_html(v)
                ),
            );
        }
        if let Some(v) = present(&team.button_text) {
            p.all("teamSection.buttonText", &TEAM_BUTTON, &button(v));
        }
        if let Some(members) = team.team_members.as_deref().filter(|l| !l.is_empty()) {
            p.once(
                "teamSection.teamMembers",
                &TEAM_MEMBERS,
                &render_team_members(members),
            );
        }
    }

    p.finish()
}

fn button(text: &str) -> String {
    format!(
        r#"<div class="text-size-tiny text-style-allcaps">{}</div>"#,
        escape_html(text)
    )
}

fn render_logos(logos: &[Logo]) -> String {
    logos
        .iter()
        .map(|logo| {
            format!(
                r#"
  <div class="home-logo-item">
    <div class="home-logo-holder">
      <div class="home-logo-base">
        <img src="{}" loading="lazy" alt="{}" class="home-logo-image">
      </div>
    </div>
  </div>"#,
                escape_html(&logo.image),
                escape_html(&logo.alt)
            )
        })
        .collect()
}

fn render_portfolio_items(items: &[PortfolioItem]) -> String {
    items
        .iter()
        .map(|item| {
            format!(
                r#"
<div role="listitem" class="home-portfolio-item w-dyn-item">
  <div class="home-portfolio-height">
    <a href="{}" class="home-portfolio-content w-inline-block">
      <img loading="lazy" alt="{}" src="{}" class="medium-logo">
      <div class="portfolio-meta">
        <div class="text-size-tiny text-style-allcaps">{}</div>
        <div class="text-size-tiny text-style-allcaps">{}</div>
      </div>
    </a>
  </div>
</div>"#,
                escape_html(&item.link),
                escape_html(&item.alt),
                escape_html(&item.image),
                escape_html(&item.category),
                escape_html(&item.date)
            )
        })
        .collect()
}

fn render_team_members(members: &[TeamMember]) -> String {
    members
        .iter()
        .map(|member| {
            format!(
                r#"
<div class="home-team-item">
  <div class="home-team-name">
    <h3 class="heading-style-h3">{}</h3>
    <div class="home-team-credit">
      <p class="text-size-xsmall text-style-allcaps text-color-white text-weight-medium">{}</p>
    </div>
  </div>
  <div class="home-team-image">
    <div class="home-team-height"></div>
    <div class="image-overlay"></div>
    <img src="{}" loading="lazy" alt="{}" class="image-fill" />
  </div>
</div>"#,
                escape_html(&member.name),
                escape_html(&member.title),
                escape_html(&member.image),
                escape_html(&member.alt)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEMPLATE: &str = r#"<html><body>
<h1 class="heading-style-xl">We Invest IN</h1>
<h1 class="heading-style-xl">Bold Founders</h1>
<p class="text-size-small text-color-white text-align-center">Let&#x27;s journey together into
  industries with unbounded growth potential.</p>
<h2 class="heading-style-h1">We understand<br />VCs are tough</h2>
<div class="text-size-tiny text-style-allcaps">View Our Verticles</div>
<div class="text-size-tiny text-style-allcaps">View Our Verticles</div>
<div class="wrap"><div class="inner"><div class="grid-holder">
<div id="w-node-_0b0c344d-7d3b-65b8-0fa5-2db7567289fa-ae360d93" class="home-logos-grid">
  <div class="home-logo-item">old</div>
</div>
</div>
</div>
</div>
<div class="heading-style-h2">01</div><h3 class="heading-style-h3">Pre-Seed</h3>
<div class="heading-style-h2">04</div><h3 class="heading-style-h3">$400k+</h3>
<img src="images/venture-008.webp">
<div role="list"><!-- Portfolio items will be dynamically generated by the backend --></div>
</body></html>"#;

    fn content(v: serde_json::Value) -> HomepageContent {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn hero_fields_are_escaped_and_replaced() {
        let out = render_homepage(
            TEMPLATE,
            &content(json!({
                "hero": {
                    "headline1": "We <b>back</b>",
                    "description": "Grow & scale"
                }
            })),
        );
        assert!(out.html.contains(r#"<h1 class="heading-style-xl">We &lt;b&gt;back&lt;/b&gt;</h1>"#));
        assert!(out.html.contains(r#"<h1 class="heading-style-xl">Bold Founders</h1>"#));
        assert!(out.html.contains(">Grow &amp; scale</p>"));
        assert!(!out.html.contains("unbounded growth"));
        assert!(out.unmatched.is_empty());
    }

    #[test]
    fn empty_strings_keep_template_copy() {
        let out = render_homepage(
            TEMPLATE,
            &content(json!({
                "hero": {"headline1": "", "description": ""},
                "logoSection": {"title": "", "buttonText": ""}
            })),
        );
        assert_eq!(out.html, TEMPLATE);
        assert!(out.unmatched.is_empty());
    }

    #[test]
    fn button_labels_replace_every_occurrence() {
        let out = render_homepage(
            TEMPLATE,
            &content(json!({"logoSection": {"buttonText": "See verticals"}})),
        );
        assert_eq!(out.html.matches(">See verticals</div>").count(), 2);
    }

    #[test]
    fn logos_grid_is_rebuilt_and_closers_kept() {
        let out = render_homepage(
            TEMPLATE,
            &content(json!({"logoSection": {"logos": [
                {"name": "Acme", "image": "images/acme.svg", "alt": "Acme logo"}
            ]}})),
        );
        assert!(out.html.contains(r#"<img src="images/acme.svg" loading="lazy" alt="Acme logo""#));
        assert!(!out.html.contains(">old<"));
        // one old item closer dropped, three per rendered logo added
        assert_eq!(out.html.matches("</div>").count(), TEMPLATE.matches("</div>").count() + 2);
    }

    #[test]
    fn fewer_than_four_cards_leave_template_alone() {
        let out = render_homepage(
            TEMPLATE,
            &content(json!({"processCards": [{"number": "09", "title": "x", "description": "y"}]})),
        );
        assert_eq!(out.html, TEMPLATE);
    }

    #[test]
    fn portfolio_placeholder_receives_items() {
        let out = render_homepage(
            TEMPLATE,
            &content(json!({"portfolioSection": {
                "image": "uploads/hero.webp",
                "portfolioItems": [{"link": "/work/slack", "alt": "Slack", "image": "s.svg", "category": "Work", "date": "2021"}]
            }})),
        );
        assert!(out.html.contains(r#"src="uploads/hero.webp""#));
        assert!(out.html.contains(r#"<a href="/work/slack""#));
        assert!(!out.html.contains("Portfolio items will be"));
    }

    #[test]
    fn drifted_copy_is_reported_not_hidden() {
        let out = render_homepage(
            TEMPLATE,
            &content(json!({"teamSection": {"title": "Our people"}})),
        );
        assert_eq!(out.html, TEMPLATE);
        assert_eq!(out.unmatched, vec!["teamSection.title"]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let data = content(crate::db::Document::Homepage.default_value());
        let first = render_homepage(TEMPLATE, &data);
        let second = render_homepage(TEMPLATE, &data);
        assert_eq!(first, second);
    }
}
