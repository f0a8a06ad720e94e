//! The logical documents kept under the data directory and their
//! first-access defaults.

use chrono::Utc;
use serde_json::{Value, json};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Users,
    Pages,
    Homepage,
    About,
    Portfolio,
    Verticals,
    Contact,
}

impl Document {
    pub fn file_name(self) -> &'static str {
        match self {
            Document::Users => "users.json",
            Document::Pages => "pages.json",
            Document::Homepage => "homepage.json",
            Document::About => "about.json",
            Document::Portfolio => "portfolio.json",
            Document::Verticals => "verticals.json",
            Document::Contact => "contact.json",
        }
    }

    /// Content written out when the backing file does not exist yet.
    pub fn default_value(self) -> Value {
        let now = Utc::now().to_rfc3339();
        match self {
            Document::Users | Document::Pages => json!([]),
            Document::Homepage => default_homepage(&now),
            Document::About => default_about(&now),
            Document::Portfolio => default_portfolio(&now),
            Document::Verticals => default_verticals(&now),
            Document::Contact => default_contact(&now),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

fn default_homepage(now: &str) -> Value {
    json!({
        "hero": {
            "title": "Ventured Brands",
            "subtitle": "Building Tomorrow's Brands Today",
            "description": "We are a venture studio that creates, launches, and scales innovative brands across multiple industries."
        },
        "logoSection": {
            "title": "We understand<br />VCs are tough",
            "description": "We are dedicated to finding the most tenacious and ambitious minds in four key industries.",
            "buttonText": "View Our Verticles",
            "logos": [
                { "name": "Washology", "image": "images/Washology.png", "alt": "Washology logo" },
                { "name": "Swim Studs", "image": "images/Swim Studs.png", "alt": "Swim Studs logo" },
                { "name": "InspectorWiz", "image": "images/InspectorWiz™ NoBG.png", "alt": "InspectorWiz logo" },
                { "name": "Slack", "image": "images/slack-light.svg", "alt": "Slack logo" },
                { "name": "Stripe", "image": "images/stripe-light.svg", "alt": "Stripe logo" },
                { "name": "Upwork", "image": "images/upwork-light.svg", "alt": "Upwork logo" },
                { "name": "Gusto", "image": "images/gusto-light.svg", "alt": "Gusto logo" },
                { "name": "Attentive", "image": "images/attentive-light.svg", "alt": "Attentive logo" },
                { "name": "Dribbble", "image": "images/dribbble-light.svg", "alt": "Dribbble logo" }
            ]
        },
        "benefitsSection": {
            "title": "We understand our founders",
            "description": "Bold Capital is on a mission to back the boldest founders changing industries across four verticals. Our portfolio companies have reached unicorn exits, with our founders maintaining a large amount of equity. We're here to help our founders achieve their goals and break into industries with massive growth potential."
        },
        "processCards": [
            {
                "number": "01",
                "title": "Pre-Seed",
                "description": "We invest at the pre-seed stage, providing up to $750k in capital to help founders grow to the next level."
            },
            {
                "number": "02",
                "title": "Unicorns",
                "description": "Our portfolio companies have reached unicorn status, and our founders maintain a large amount of equity."
            },
            {
                "number": "03",
                "title": "Process",
                "description": "Our transparent and open investment process ensures you always know where you are in our process."
            },
            {
                "number": "04",
                "title": "$400k+",
                "description": "We're passionate about helping founders grow fast, and our average initial cheque size is $400k."
            }
        ],
        "portfolioSection": {
            "title": "Our investments are top-tier",
            "description": "Most of our portfolio companies have achieved unicorn exits with our founders holding majority equity.",
            "buttonText": "View Our Portfolio",
            "image": "images/venture-008.webp"
        },
        "teamSection": {
            "title": "We found the<br />best tallent",
            "description": "Our team is passionate about working with founders who break through barriers.",
            "buttonText": "Read our story"
        },
        "updatedAt": now
    })
}

fn default_about(now: &str) -> Value {
    json!({
        "hero": {
            "subtitle": "Empowering Brand Excellence",
            "description": "We are a premier brand management company specializing in acquiring, developing, and scaling consumer brands across multiple industries.",
            "image": "",
            "storyTitle": "Our Story"
        },
        "storyIntro": {
            "title": "We are Ventured Brands",
            "description": "A premier brand management company dedicated to acquiring, developing, and scaling consumer brands that make a meaningful impact in people's lives."
        },
        "story": {
            "title": "Our Journey",
            "description": "Founded with a vision to transform how brands connect with consumers, we have built a portfolio of successful companies across diverse industries.",
            "content": "We believe that great brands are built on authentic connections with consumers."
        },
        "quote": {
            "text": "We don't just invest in brands - we partner with visionaries to build the future of consumer experiences.",
            "author": "Ventured Brands Leadership Team"
        },
        "team": {
            "title": "Meet Our Team",
            "description": "Our diverse team of experts brings together decades of experience in brand management, marketing, operations, and strategic growth.",
            "teamMembers": []
        },
        "gallery": { "slides": [] },
        "updatedAt": now
    })
}

fn default_portfolio(now: &str) -> Value {
    let projects: Vec<Value> = [
        ("slack", "Slack", "Work", "10.23.2021"),
        ("asana", "Asana", "Work", "09.15.2021"),
        ("airbnb", "Airbnb", "Live", "08.12.2021"),
        ("square", "Square", "Work", "07.08.2021"),
        ("pendo", "Pendo", "Learn", "06.22.2021"),
        ("zoom", "Zoom", "Work", "05.18.2021"),
        ("gusto", "Gusto", "Work", "04.14.2021"),
        ("docusign", "DocuSign", "Work", "03.10.2021"),
        ("zapier", "Zapier", "Work", "02.25.2021"),
        ("dribbble", "Dribbble", "Play", "01.30.2021"),
    ]
    .into_iter()
    .map(|(id, title, category, date)| {
        json!({
            "id": id,
            "title": title,
            "category": category,
            "date": date,
            "url": format!("/work/{id}"),
            "isActive": true
        })
    })
    .collect();

    json!({
        "lastUpdated": now,
        "hero": {
            "title": "Explore our work",
            "description": "Sixteen of our companies have reached unicorn exits, with our founders holding a majority of the equity in their company."
        },
        "projects": projects
    })
}

fn default_verticals(now: &str) -> Value {
    json!({
        "lastUpdated": now,
        "sections": [
            {
                "id": "live",
                "title": "Live",
                "shortDescription": "Changing lives",
                "longDescription": "Licensing brands that make daily living better, cleaner, and easier."
            },
            {
                "id": "work",
                "title": "Work",
                "shortDescription": "Boosting growth",
                "longDescription": "Creating plug-and-play business models that help owners scale fast."
            },
            {
                "id": "play",
                "title": "Play",
                "shortDescription": "Reinventing fun",
                "longDescription": "Building nostalgic and exciting brands customers can't resist."
            },
            {
                "id": "learn",
                "title": "Learn",
                "shortDescription": "Pushing minds",
                "longDescription": "Designing businesses that teach, train, and inspire at scale."
            }
        ]
    })
}

fn default_contact(now: &str) -> Value {
    json!({
        "form": {
            "title": "Get in touch",
            "fields": {
                "name": { "label": "Name", "placeholder": "Your name" },
                "email": { "label": "Email", "placeholder": "you@company.com" },
                "company": { "label": "Company", "placeholder": "Company name" },
                "message": { "label": "Message", "placeholder": "Tell us about your business" }
            },
            "submitButton": "Submit"
        },
        "faq": {
            "title": "Frequently asked questions",
            "items": []
        },
        "lastUpdated": now
    })
}
