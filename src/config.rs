//! Site-wide configuration: tracked sections, breakpoints, the canned
//! chat responses, and third-party endpoints.

/// Page sections tracked by the scrollspy, in document order, with the
/// nav labels shown for them.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("clientreview", "Client Reviews"),
    ("services", "Services"),
    ("about", "About"),
    ("growbiz-ai-assistant", "AI Assistant"),
];

/// Viewport width at or below which the mobile layout applies, in CSS px.
pub const MOBILE_BREAKPOINT: f64 = 575.98;

pub const TAWK_EMBED_URL: &str = "https://embed.tawk.to/687e0f8dd69815191a7c5877/1j0m6pgm8";

pub const CONTACT_PHONE: &str = "951-172-1668";
pub const CONTACT_WHATSAPP: &str = "787-584-5879";

/// Keyword table for the canned chat assistant. Matching is by lowercase
/// substring; the first matching row wins, so more specific phrases come
/// before the shorter ones they contain.
pub const CANNED_RESPONSES: &[(&str, &str)] = &[
    (
        "how much does a website cost",
        "Our website packages start from ₹7,999 for a complete business website including hosting, SEO, and mobile responsiveness. Premium packages with e-commerce range from ₹12,999 to ₹25,999. Would you like a detailed quote for your specific needs?",
    ),
    (
        "website cost",
        "Website costs vary by features: Basic Business Website (₹7,999), Premium with E-commerce (₹12,999-₹25,999). All include hosting, mobile optimization, and SEO. What type of business do you have?",
    ),
    (
        "how long does it take",
        "We deliver most websites in 5-7 business days! Complex e-commerce sites may take 10-14 days. We provide daily updates and involve you in every step. Need it faster? We offer express delivery options.",
    ),
    (
        "timeline",
        "Standard delivery: 5-7 days. E-commerce sites: 10-14 days. We work efficiently while maintaining quality. Rush jobs available for urgent requirements.",
    ),
    (
        "do you provide seo",
        "Yes! SEO is included in all our packages. We optimize for local Nagpur searches, Google My Business setup, keyword optimization, and ongoing SEO support. Most clients see improved rankings within 2-3 months.",
    ),
    (
        "seo services",
        "We provide complete SEO: keyword research, on-page optimization, local SEO for Nagpur businesses, Google My Business setup, content optimization, and monthly reports. SEO is included in all website packages!",
    ),
    (
        "support",
        "We provide 24/7 support including technical help, content updates, security monitoring, and ongoing maintenance. Our support team is always available via WhatsApp, phone, or email.",
    ),
    (
        "digital marketing",
        "Our digital marketing includes Google Ads, Facebook/Instagram marketing, local SEO, review management, content creation, and social media management. We create targeted campaigns for Nagpur businesses.",
    ),
    (
        "payment",
        "We offer flexible payment options: 50% advance, 50% on completion. EMI options available for larger projects. Multiple payment methods accepted including UPI, bank transfer, and cards.",
    ),
    (
        "portfolio",
        "We've successfully delivered 200+ projects including tuition centers, salons, restaurants, retail stores, and professional services in Nagpur. Would you like to see examples from your industry?",
    ),
    (
        "hosting",
        "All our packages include 1 year free hosting, SSL certificate, daily backups, and 99.9% uptime guarantee. Hosting renewal is very affordable at just ₹3,999/year.",
    ),
    (
        "maintenance",
        "Website maintenance includes security updates, content changes, performance optimization, backup management, and technical support. It's included free for the first year!",
    ),
];

/// One-tap questions shown under the chat input.
pub const QUICK_QUESTIONS: &[&str] = &[
    "How much does a website cost?",
    "How long does it take?",
    "Do you provide SEO?",
];
