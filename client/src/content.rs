//! Static site content: services, portfolio projects, testimonials and
//! company metadata.
//!
//! DESIGN
//! ======
//! Everything here is `'static` data compiled into the binary. Pages borrow
//! from `catalog()` and never mutate it, so the same values render on the
//! server and during hydration.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Category filter value that matches every project.
pub const ALL_CATEGORIES: &str = "All";

/// Portfolio filter values in display order.
pub const PORTFOLIO_CATEGORIES: [&str; 7] =
    [ALL_CATEGORIES, "Landing Page", "E-commerce", "Dashboard", "Fintech", "Portfolio", "Healthcare"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    pub tech: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

/// Direct contact channels plus the endpoint the contact form posts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub whatsapp: &'static str,
    pub endpoint: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaitlistInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub endpoint: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub about: &'static str,
    pub contact: ContactInfo,
    pub ai_waitlist: WaitlistInfo,
}

/// Card with a glyph, heading and short blurb (values, waitlist features).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Secondary service card on the services page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expertise {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub icon: &'static str,
    pub name: &'static str,
    pub percentage: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub expertise: &'static str,
    pub image: &'static str,
}

/// Headline figure with a caption ("50+ Happy Clients").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Immutable, process-wide content catalog.
#[derive(Debug)]
pub struct ContentCatalog {
    pub company: CompanyInfo,
    pub services: &'static [Service],
    pub projects: &'static [Project],
    pub testimonials: &'static [Testimonial],
}

impl ContentCatalog {
    /// Projects matching a portfolio filter value. `"All"` matches everything;
    /// any other value must equal the project's category exactly.
    #[must_use]
    pub fn projects_in(&self, category: &str) -> Vec<&'static Project> {
        let projects: &'static [Project] = self.projects;
        projects
            .iter()
            .filter(|project| category == ALL_CATEGORIES || project.category == category)
            .collect()
    }
}

/// The site's content catalog.
#[must_use]
pub fn catalog() -> &'static ContentCatalog {
    &CATALOG
}

/// Digits-only WhatsApp link for a display number such as `+1 (316) 236-8103`.
#[must_use]
pub fn whatsapp_link(number: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}")
}

static CATALOG: ContentCatalog = ContentCatalog {
    company: COMPANY,
    services: &SERVICES,
    projects: &PROJECTS,
    testimonials: &TESTIMONIALS,
};

const FORMSPREE_ENDPOINT: &str = "https://formspree.io/f/mvgrekqd";

const COMPANY: CompanyInfo = CompanyInfo {
    name: "CashCue",
    tagline: "We Build Advanced, Modern Websites That Make Your Business Stand Out",
    description: "From sleek animations to futuristic design, CashCue crafts websites that impress your clients and grow your brand.",
    about: "CashCue is a next-generation digital studio. We don't just build websites. We create futuristic experiences that attract, engage, and convert.",
    contact: ContactInfo {
        email: "cashcue001@gmail.com",
        whatsapp: "+1 (316) 236-8103",
        endpoint: FORMSPREE_ENDPOINT,
    },
    ai_waitlist: WaitlistInfo {
        title: "CashCue AI",
        description: "CashCue is coming soon: an AI tool that helps you discover passive income ideas to grow your wealth.",
        endpoint: FORMSPREE_ENDPOINT,
    },
};

const SERVICES: [Service; 4] = [
    Service {
        id: 1,
        title: "Modern Website Development",
        description: "Cutting-edge websites built with the latest technologies, optimized for performance and user experience.",
        features: &["Responsive Design", "Fast Loading", "SEO Optimized", "Modern UI/UX"],
    },
    Service {
        id: 2,
        title: "Advanced Animations & Interactive UI",
        description: "Stunning animations and interactive elements that captivate your audience and enhance engagement.",
        features: &["3D Animations", "Smooth Transitions", "Interactive Elements", "Micro-interactions"],
    },
    Service {
        id: 3,
        title: "Custom Business Landing Pages",
        description: "High-converting landing pages designed specifically for your business goals and target audience.",
        features: &["Conversion Focused", "A/B Testing Ready", "Analytics Integration", "Mobile Optimized"],
    },
    Service {
        id: 4,
        title: "AI-Powered Website Add-ons",
        description: "Integrate artificial intelligence features to make your website smarter and more efficient.",
        features: &["Chatbots", "Personalization", "Automation", "Smart Analytics"],
    },
];

const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "TechCorp Landing Page",
        description: "A futuristic landing page for a tech company with advanced animations and 3D elements.",
        image: "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=800&h=600&fit=crop",
        category: "Landing Page",
        tech: &["React", "Three.js", "GSAP"],
    },
    Project {
        id: 2,
        title: "E-commerce Platform",
        description: "Modern e-commerce platform with smooth animations and intuitive user experience.",
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop",
        category: "E-commerce",
        tech: &["Next.js", "Stripe", "Framer Motion"],
    },
    Project {
        id: 3,
        title: "AI SaaS Dashboard",
        description: "Sleek dashboard interface for an AI-powered SaaS application with real-time data visualization.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
        category: "Dashboard",
        tech: &["React", "D3.js", "WebGL"],
    },
    Project {
        id: 4,
        title: "Crypto Trading App",
        description: "Advanced trading interface with real-time charts and futuristic design elements.",
        image: "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?w=800&h=600&fit=crop",
        category: "Fintech",
        tech: &["Vue.js", "WebSocket", "Canvas"],
    },
    Project {
        id: 5,
        title: "Digital Agency Portfolio",
        description: "Stunning portfolio website showcasing creative work with interactive 3D elements.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
        category: "Portfolio",
        tech: &["React", "Three.js", "GSAP"],
    },
    Project {
        id: 6,
        title: "Healthcare Platform",
        description: "Clean and professional healthcare platform with focus on accessibility and user experience.",
        image: "https://images.unsplash.com/photo-1598257006626-48b0c252070d?w=800&h=600&fit=crop",
        category: "Healthcare",
        tech: &["Angular", "Node.js", "MongoDB"],
    },
];

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        id: 1,
        name: "Sarah Johnson",
        company: "TechFlow Inc.",
        role: "CEO",
        content: "CashCue delivered exactly what we envisioned: a futuristic website that perfectly represents our brand. The attention to detail and smooth animations exceeded our expectations.",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Michael Chen",
        company: "InnovateX",
        role: "Marketing Director",
        content: "Working with CashCue was seamless. They understood our vision and created a website that not only looks stunning but also converts visitors into customers.",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Emily Rodriguez",
        company: "FutureBuilders",
        role: "Founder",
        content: "The team at CashCue is incredibly talented. They built us a website that stands out from the competition with its advanced animations and modern design.",
        rating: 5,
    },
];

// =============================================================================
// PAGE-SPECIFIC CONTENT
// =============================================================================

/// Glyphs shown beside the four catalog services, by position.
pub const SERVICE_ICONS: [&str; 4] = ["⚡", "🚀", "★", "🤖"];

pub const ADDITIONAL_EXPERTISE: [Expertise; 4] = [
    Expertise {
        icon: "🌐",
        title: "Web Development",
        description: "Full-stack development with modern frameworks and technologies.",
        features: &["React/Next.js", "Node.js Backend", "Database Design", "API Integration"],
    },
    Expertise {
        icon: "📱",
        title: "Mobile Optimization",
        description: "Ensure your website works perfectly on all devices and screen sizes.",
        features: &["Responsive Design", "Touch Optimization", "Fast Loading", "PWA Ready"],
    },
    Expertise {
        icon: "🔍",
        title: "SEO Optimization",
        description: "Get found by your customers with advanced SEO strategies.",
        features: &["Technical SEO", "Content Strategy", "Performance Optimization", "Analytics Setup"],
    },
    Expertise {
        icon: "📊",
        title: "Performance Analytics",
        description: "Track and optimize your website's performance with detailed analytics.",
        features: &["User Behavior Tracking", "Conversion Optimization", "A/B Testing", "Custom Dashboards"],
    },
];

/// Delivery process steps on the services page: (step, title, blurb).
pub const PROCESS_STEPS: [(&str, &str, &str); 4] = [
    ("01", "Discovery", "We understand your goals, target audience, and project requirements."),
    ("02", "Design", "Create stunning mockups and prototypes that bring your vision to life."),
    ("03", "Development", "Build your website with cutting-edge technology and best practices."),
    ("04", "Launch", "Deploy your website and provide ongoing support and maintenance."),
];

pub const VALUES: [Highlight; 4] = [
    Highlight {
        icon: "🎯",
        title: "Innovation First",
        description: "We're always pushing the boundaries of what's possible in web development.",
    },
    Highlight {
        icon: "⚡",
        title: "Performance Driven",
        description: "Every website we build is optimized for speed, accessibility, and user experience.",
    },
    Highlight {
        icon: "👥",
        title: "Client Focused",
        description: "Your success is our success. We work closely with you to achieve your goals.",
    },
    Highlight {
        icon: "🏆",
        title: "Quality Assured",
        description: "We maintain the highest standards in code quality and project delivery.",
    },
];

pub const SKILLS: [Skill; 4] = [
    Skill { icon: "</>", name: "Frontend Development", percentage: 95 },
    Skill { icon: "🎨", name: "UI/UX Design", percentage: 90 },
    Skill { icon: "🚀", name: "3D Animations", percentage: 85 },
    Skill { icon: "⚡", name: "Performance Optimization", percentage: 92 },
];

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Alex Chen",
        role: "Founder & Lead Developer",
        expertise: "Full-Stack Development, UI/UX Design",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
    },
    TeamMember {
        name: "Henry Wilson",
        role: "Creative Director",
        expertise: "3D Animation, Visual Design",
        image: "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=400&h=400&fit=crop&crop=faces",
    },
    TeamMember {
        name: "Marcus Rodriguez",
        role: "Senior Developer",
        expertise: "Backend Systems, AI Integration",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
    },
];

pub const STUDIO_STATS: [Stat; 4] = [
    Stat { value: "3+", label: "Years in Business" },
    Stat { value: "50+", label: "Happy Clients" },
    Stat { value: "100+", label: "Projects Delivered" },
    Stat { value: "24/7", label: "Support Available" },
];

pub const WAITLIST_FEATURES: [Highlight; 3] = [
    Highlight {
        icon: "🧠",
        title: "AI-Powered Insights",
        description: "Get personalized passive income recommendations based on your skills and interests.",
    },
    Highlight {
        icon: "📈",
        title: "Market Analysis",
        description: "Real-time market trends and opportunities in various passive income streams.",
    },
    Highlight {
        icon: "⚡",
        title: "Instant Strategies",
        description: "Receive actionable strategies you can implement immediately to start earning.",
    },
];

pub const WAITLIST_BENEFITS: [&str; 3] = [
    "50% discount on premium features",
    "Exclusive AI-generated income strategies",
    "Priority customer support",
];

pub const INCOME_STREAMS: [&str; 8] = [
    "Digital Products",
    "Affiliate Marketing",
    "Online Courses",
    "Stock Investments",
    "Real Estate",
    "Cryptocurrency",
    "E-commerce",
    "Content Creation",
];

pub const WAITLIST_STATS: [Stat; 3] = [
    Stat { value: "10K+", label: "Waitlist Members" },
    Stat { value: "500+", label: "Income Strategies" },
    Stat { value: "Q1", label: "2024 Launch" },
];

/// Contact form project-type options: (value, label). The empty value is the
/// unselected placeholder.
pub const PROJECT_TYPES: [(&str, &str); 6] = [
    ("", "Select project type"),
    ("website", "New Website"),
    ("redesign", "Website Redesign"),
    ("ecommerce", "E-commerce"),
    ("app", "Web Application"),
    ("other", "Other"),
];

pub const BUDGETS: [(&str, &str); 5] = [
    ("", "Select budget range"),
    ("5k-10k", "$5,000 - $10,000"),
    ("10k-25k", "$10,000 - $25,000"),
    ("25k-50k", "$25,000 - $50,000"),
    ("50k+", "$50,000+"),
];
