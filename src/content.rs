//! Hard-coded site content.

use chrono::NaiveDate;

pub const OWNER_NAME: &str = "Vincenzo";
pub const AVAILABILITY: &str = "EARLY FEB 2025";

pub struct NavLink {
    pub id: &'static str,
    pub title: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "about", title: "About" },
    NavLink { id: "work", title: "Work" },
    NavLink { id: "blog", title: "Blog" },
    NavLink { id: "contact", title: "Contact" },
];

pub struct Service {
    pub title: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service { title: "Backend Developer" },
    Service { title: "Frontend Developer" },
    Service { title: "DevSecOps Engineer" },
    Service { title: "Mobile Developer" },
];

pub struct Technology {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const TECHNOLOGIES: &[Technology] = &[
    Technology { name: "HTML 5", icon: "/assets/tech/html.png" },
    Technology { name: "CSS 3", icon: "/assets/tech/css.png" },
    Technology { name: "JavaScript", icon: "/assets/tech/javascript.png" },
    Technology { name: "TypeScript", icon: "/assets/tech/typescript.png" },
    Technology { name: "React JS", icon: "/assets/tech/reactjs.png" },
    Technology { name: "Redux Toolkit", icon: "/assets/tech/redux.png" },
    Technology { name: "Tailwind CSS", icon: "/assets/tech/tailwind.png" },
    Technology { name: "Node JS", icon: "/assets/tech/nodejs.png" },
    Technology { name: "MongoDB", icon: "/assets/tech/mongodb.png" },
    Technology { name: "Three JS", icon: "/assets/tech/threejs.svg" },
    Technology { name: "git", icon: "/assets/tech/git.png" },
    Technology { name: "figma", icon: "/assets/tech/figma.png" },
    Technology { name: "docker", icon: "/assets/tech/docker.png" },
];

/// Splits the technologies round-robin into `count` columns.
pub fn technology_columns(count: usize) -> Vec<Vec<&'static Technology>> {
    let mut columns = (0..count).map(|_| Vec::new()).collect::<Vec<_>>();
    if count == 0 {
        return columns;
    }

    for (index, technology) in TECHNOLOGIES.iter().enumerate() {
        columns[index % count].push(technology);
    }

    columns
}

pub struct Experience {
    pub title: &'static str,
    pub company_name: &'static str,
    pub icon: &'static str,
    pub icon_bg: &'static str,
    pub date: &'static str,
    pub points: &'static [&'static str],
}

impl Experience {
    pub fn start_year(&self) -> &'static str {
        self.date
            .split('-')
            .next()
            .and_then(|start| start.split_whitespace().last())
            .unwrap_or(self.date)
    }
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Full Stack Developer",
        company_name: "Sagres S.p.A.",
        icon: "/assets/company/sagres.png",
        icon_bg: "#383E56",
        date: "Jul 2024 - Present",
        points: &[
            "Developing enterprise web applications using PHP Laravel, React, and Vue.js frameworks.",
            "Implementing containerized solutions with Docker and Kubernetes for scalable deployments.",
            "Building secure RESTful APIs and integrating third-party services with OAuth2 and JWT authentication.",
            "Optimizing database performance and designing efficient MariaDB/MySQL schemas for high-traffic applications.",
        ],
    },
    Experience {
        title: "Freelance Full Stack Developer",
        company_name: "Self-employed",
        icon: "/assets/company/freelance.png",
        icon_bg: "#E6DEDD",
        date: "Jan 2023 - Feb 2024",
        points: &[
            "Delivered custom web solutions for diverse clients using modern tech stack including React.js and Laravel.",
            "Implemented responsive designs with Tailwind CSS and Bootstrap ensuring cross-browser compatibility.",
            "Managed complete project lifecycle from requirements gathering to deployment using Agile methodologies.",
            "Integrated payment gateways, email services, and developed custom admin panels with Filament v3.",
        ],
    },
    Experience {
        title: "Social Media Manager",
        company_name: "Freelance",
        icon: "/assets/company/social.png",
        icon_bg: "#383E56",
        date: "Jan 2023 - Feb 2023",
        points: &[
            "Managed social media presence for high-profile clients on TikTok and other platforms.",
            "Created engaging content strategies and visual graphics to enhance brand visibility.",
            "Analyzed performance metrics and optimized content for maximum audience engagement.",
            "Collaborated with clients to develop targeted campaigns aligned with business objectives.",
        ],
    },
    Experience {
        title: "Computer Science Student",
        company_name: "I.T.I.S. Augusto Righi",
        icon: "/assets/company/school.png",
        icon_bg: "#E6DEDD",
        date: "Sep 2012 - Jul 2017",
        points: &[
            "Achieved Bachelor's Degree in Computer Science and Telecommunications Technology with 90/100 grade.",
            "Developed strong foundation in software development, web technologies, and system architecture.",
            "Completed practical projects in full-stack development using various programming languages.",
            "Gained expertise in networking, database management, and software engineering principles.",
        ],
    },
];

pub struct Tag {
    pub name: &'static str,
    pub color: &'static str,
}

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [Tag],
    pub image: &'static str,
    pub modal_image: &'static str,
    pub source_code_link: &'static str,
    pub live_site_link: &'static str,
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

const PLACEHOLDER_IMAGE: &str = "/assets/placeholder1.png";
const PLACEHOLDER_MODAL_IMAGE: &str = "/assets/placeholder2.png";

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Placeholder 1",
        description: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
        tags: &[
            Tag { name: "react", color: "blue-text-gradient" },
            Tag { name: "mongodb", color: "green-text-gradient" },
            Tag { name: "tailwind", color: "pink-text-gradient" },
        ],
        image: PLACEHOLDER_IMAGE,
        modal_image: PLACEHOLDER_MODAL_IMAGE,
        source_code_link: "https://github.com",
        live_site_link: "https://example.com",
    },
    Project {
        name: "Placeholder 2",
        description: "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.",
        tags: &[
            Tag { name: "nextjs", color: "blue-text-gradient" },
            Tag { name: "nodejs", color: "green-text-gradient" },
            Tag { name: "scss", color: "pink-text-gradient" },
        ],
        image: PLACEHOLDER_IMAGE,
        modal_image: PLACEHOLDER_MODAL_IMAGE,
        source_code_link: "https://github.com",
        live_site_link: "https://example.com",
    },
    Project {
        name: "Placeholder 3",
        description: "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.",
        tags: &[
            Tag { name: "vue", color: "blue-text-gradient" },
            Tag { name: "laravel", color: "green-text-gradient" },
            Tag { name: "bootstrap", color: "pink-text-gradient" },
        ],
        image: PLACEHOLDER_IMAGE,
        modal_image: PLACEHOLDER_MODAL_IMAGE,
        source_code_link: "https://github.com",
        live_site_link: "https://example.com",
    },
    Project {
        name: "Placeholder 4",
        description: "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.",
        tags: &[
            Tag { name: "angular", color: "blue-text-gradient" },
            Tag { name: "express", color: "green-text-gradient" },
            Tag { name: "material-ui", color: "pink-text-gradient" },
        ],
        image: PLACEHOLDER_IMAGE,
        modal_image: PLACEHOLDER_MODAL_IMAGE,
        source_code_link: "https://github.com",
        live_site_link: "https://example.com",
    },
    Project {
        name: "Placeholder 5",
        description: "Sed ut perspiciatis unde omnis iste natus error sit voluptatem accusantium doloremque laudantium.",
        tags: &[
            Tag { name: "svelte", color: "blue-text-gradient" },
            Tag { name: "firebase", color: "green-text-gradient" },
            Tag { name: "css", color: "pink-text-gradient" },
        ],
        image: PLACEHOLDER_IMAGE,
        modal_image: PLACEHOLDER_MODAL_IMAGE,
        source_code_link: "https://github.com",
        live_site_link: "https://example.com",
    },
    Project {
        name: "Placeholder 6",
        description: "Nemo enim ipsam voluptatem quia voluptas sit aspernatur aut odit aut fugit, sed quia consequuntur magni.",
        tags: &[
            Tag { name: "react", color: "blue-text-gradient" },
            Tag { name: "graphql", color: "green-text-gradient" },
            Tag { name: "styled-components", color: "pink-text-gradient" },
        ],
        image: PLACEHOLDER_IMAGE,
        modal_image: PLACEHOLDER_MODAL_IMAGE,
        source_code_link: "https://github.com",
        live_site_link: "https://example.com",
    },
];

pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time_min: u32,
    pub tags: &'static [&'static str],
    pub image: &'static str,
}

impl PartialEq for BlogPost {
    fn eq(&self, other: &Self) -> bool {
        self.slug == other.slug
    }
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// "August 10, 2025"; falls back to the raw date string.
    pub fn long_date(&self) -> String {
        self.published_on()
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| self.date.to_string())
    }

    /// "8/10/2025"
    pub fn short_date(&self) -> String {
        self.published_on()
            .map(|date| date.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| self.date.to_string())
    }
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "monolith-to-microservices-laravel-react",
        title: "From Monolith to Microservices: A Practical Migration with Laravel & React",
        excerpt: "A pragmatic roadmap to decompose a legacy monolith into independently deployable services, without disrupting delivery.",
        date: "2025-08-10",
        read_time_min: 8,
        tags: &["architecture", "microservices", "laravel", "react", "kubernetes"],
        image: PLACEHOLDER_IMAGE,
    },
    BlogPost {
        slug: "cicd-github-actions-docker-k8s",
        title: "CI/CD for Modern Web Apps: GitHub Actions, Docker & K8s",
        excerpt: "Designing a robust pipeline from commit to production with build caching, preview deployments and progressive delivery.",
        date: "2025-08-08",
        read_time_min: 7,
        tags: &["ci/cd", "devops", "github-actions", "docker", "kubernetes"],
        image: PLACEHOLDER_IMAGE,
    },
    BlogPost {
        slug: "security-first-patterns-full-stack-devops",
        title: "Hardening Your Stack: Security-first Patterns in Full Stack DevOps",
        excerpt: "Threat modeling, secrets management and minimal-privilege deployments that scale with your team.",
        date: "2025-08-06",
        read_time_min: 6,
        tags: &["security", "devsecops", "threat-modeling", "secrets"],
        image: PLACEHOLDER_IMAGE,
    },
    BlogPost {
        slug: "observability-tracing-metrics-logs",
        title: "Observability 101: Tracing, Metrics and Logs that Matter",
        excerpt: "From black-box to glass-box systems with actionable telemetry and SLOs.",
        date: "2025-08-05",
        read_time_min: 5,
        tags: &["observability", "otel", "sre"],
        image: PLACEHOLDER_IMAGE,
    },
    BlogPost {
        slug: "react-performance-profiling",
        title: "Profiling React Apps: Rendering, Memoization and Suspense",
        excerpt: "Tactics to cut wasted renders and ship smoother UIs without premature optimization.",
        date: "2025-08-04",
        read_time_min: 9,
        tags: &["react", "performance", "profiling"],
        image: PLACEHOLDER_IMAGE,
    },
    BlogPost {
        slug: "laravel-scaling-strategies",
        title: "Scaling Laravel APIs: Queues, Caching and Horizontal Sharding",
        excerpt: "Blueprints for resilient high-throughput backends with predictable latency.",
        date: "2025-08-03",
        read_time_min: 7,
        tags: &["laravel", "redis", "mysql"],
        image: PLACEHOLDER_IMAGE,
    },
];

#[derive(Debug, PartialEq, Eq)]
pub enum Block {
    Heading(&'static str),
    Subheading(&'static str),
    Paragraph(&'static str),
    Code(&'static str),
    List(&'static [&'static str]),
}

struct Article {
    slug: &'static str,
    body: &'static [Block],
}

const ARTICLES: &[Article] = &[
    Article {
        slug: "monolith-to-microservices-laravel-react",
        body: &[
            Block::Heading("The Challenge"),
            Block::Paragraph(
                "Legacy monolithic applications often become bottlenecks in modern software development. \
                 They're difficult to scale, challenging to maintain, and slow to deploy. Our client faced \
                 all these challenges with their 10-year-old monolithic application serving millions of users.",
            ),
            Block::Heading("The Approach"),
            Block::Paragraph(
                "We adopted the Strangler Fig pattern to gradually decompose the monolith into microservices. \
                 This approach allowed us to migrate functionality piece by piece without disrupting the \
                 existing system.",
            ),
            Block::Subheading("Phase 1: Identify Bounded Contexts"),
            Block::Paragraph(
                "We started by mapping out the different domains within the monolith. User management, \
                 payment processing, and inventory management emerged as clear candidates for extraction.",
            ),
            Block::Subheading("Phase 2: Extract User Service"),
            Block::Paragraph(
                "The user service was our first extraction. We implemented an API gateway to route \
                 authentication requests to the new service while keeping other functionalities in the monolith.",
            ),
            Block::Code(
                "// API Gateway routing configuration\n{\n  \"/api/auth/*\": \"http://user-service:3001\",\n  \"/api/users/*\": \"http://user-service:3001\",\n  \"/api/*\": \"http://legacy-monolith:3000\"\n}",
            ),
            Block::Subheading("Phase 3: Implement Event-Driven Communication"),
            Block::Paragraph(
                "We introduced Apache Kafka for asynchronous communication between services, ensuring \
                 data consistency across the distributed system.",
            ),
            Block::Heading("Results"),
            Block::List(&[
                "70% reduction in deployment time",
                "Independent scaling of critical services",
                "Improved fault isolation and system resilience",
                "Enabled parallel development across multiple teams",
            ]),
            Block::Heading("Key Takeaways"),
            Block::Paragraph(
                "The journey from monolith to microservices is not just a technical transformation, it's \
                 an organizational one. Success requires careful planning, gradual migration, and strong \
                 communication between teams.",
            ),
        ],
    },
    Article {
        slug: "cicd-github-actions-docker-k8s",
        body: &[
            Block::Heading("Modern CI/CD Pipeline Architecture"),
            Block::Paragraph(
                "Building a robust CI/CD pipeline is crucial for modern web applications. This article explores \
                 how to create an automated pipeline using GitHub Actions, Docker, and Kubernetes that enables \
                 safe, frequent deployments with build caching and preview environments.",
            ),
            Block::Heading("GitHub Actions Workflow"),
            Block::Paragraph(
                "Our pipeline starts with GitHub Actions, triggered on every push to the main branch and pull requests. \
                 Here's the core workflow structure:",
            ),
            Block::Code(
                "name: CI/CD Pipeline\non:\n  push:\n    branches: [main, develop]\n  pull_request:\n    branches: [main]\njobs:\n  test:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v3\n      - run: npm ci\n      - run: npm test\n  build:\n    needs: test\n    runs-on: ubuntu-latest\n    steps:\n      - uses: docker/build-push-action@v4\n        with:\n          push: true\n          cache-from: type=registry\n          cache-to: type=inline",
            ),
            Block::Heading("Docker Multi-Stage Builds"),
            Block::Paragraph(
                "We use multi-stage Docker builds to optimize image size and leverage build caching:",
            ),
            Block::Code(
                "# Build stage\nFROM node:18-alpine AS builder\nWORKDIR /app\nCOPY package*.json ./\nRUN npm ci --only=production\nCOPY . .\nRUN npm run build\n# Production stage\nFROM node:18-alpine\nWORKDIR /app\nCOPY --from=builder /app/dist ./dist\nEXPOSE 3000\nCMD [\"node\", \"dist/index.js\"]",
            ),
            Block::Heading("Preview Environments"),
            Block::Paragraph(
                "Every pull request automatically creates a preview environment using Kubernetes namespaces. \
                 This allows stakeholders to test changes before merging:",
            ),
            Block::List(&[
                "Automatic SSL certificates via cert-manager",
                "Unique URLs like pr-123.preview.domain.com",
                "Automatic cleanup after PR merge",
                "Database seeding with test data",
            ]),
            Block::Heading("Key Metrics"),
            Block::List(&[
                "Average build time: 3 minutes (down from 15)",
                "Deployment frequency: 20+ per day",
                "Mean time to recovery: < 5 minutes",
                "Change failure rate: < 2%",
            ]),
        ],
    },
];

pub enum ArticleLookup {
    Found(&'static BlogPost, &'static [Block]),
    ComingSoon(&'static BlogPost),
    Missing,
}

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

pub fn lookup_article(slug: &str) -> ArticleLookup {
    let Some(post) = find_post(slug) else {
        return ArticleLookup::Missing;
    };

    match ARTICLES.iter().find(|article| article.slug == slug) {
        Some(article) => ArticleLookup::Found(post, article.body),
        None => ArticleLookup::ComingSoon(post),
    }
}

pub struct Social {
    pub name: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
}

pub const SOCIALS: &[Social] = &[
    Social { name: "github", icon: "/assets/socials/github.svg", link: "https://github.com/sanidhyy" },
    Social { name: "youtube", icon: "/assets/socials/youtube.svg", link: "https://www.youtube.com/@TechnicalVincent2004" },
    Social { name: "linkedin", icon: "/assets/socials/linkedin.svg", link: "https://linkedin.com/in/vincenzo-pirozzi-cto" },
    Social { name: "twitter", icon: "/assets/socials/twitter.svg", link: "https://twitter.com" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unknown_slug_is_missing() {
        assert!(matches!(lookup_article("does-not-exist"), ArticleLookup::Missing));
    }

    #[test]
    fn known_post_without_body_is_coming_soon() {
        let ArticleLookup::ComingSoon(post) = lookup_article("laravel-scaling-strategies") else {
            panic!("expected a coming-soon article");
        };
        assert_eq!(post.read_time_min, 7);
    }

    #[test]
    fn written_article_resolves_with_its_body() {
        let ArticleLookup::Found(post, body) = lookup_article("monolith-to-microservices-laravel-react")
        else {
            panic!("expected a full article");
        };
        assert_eq!(post.long_date(), "August 10, 2025");
        assert!(matches!(body.first(), Some(Block::Heading("The Challenge"))));
    }

    #[test]
    fn every_article_belongs_to_a_post_and_slugs_are_unique() {
        let slugs = BLOG_POSTS.iter().map(|post| post.slug).collect::<HashSet<_>>();

        assert_eq!(slugs.len(), BLOG_POSTS.len());
        assert!(ARTICLES.iter().all(|article| slugs.contains(article.slug)));
        assert!(BLOG_POSTS.iter().all(|post| post.published_on().is_some()));
    }

    #[test]
    fn dates_render_in_both_formats() {
        let post = find_post("cicd-github-actions-docker-k8s").unwrap();

        assert_eq!(post.long_date(), "August 8, 2025");
        assert_eq!(post.short_date(), "8/8/2025");
    }

    #[test]
    fn experience_start_year_comes_from_the_date_range() {
        assert_eq!(EXPERIENCES[0].start_year(), "2024");
        assert_eq!(EXPERIENCES[3].start_year(), "2012");
    }

    #[test]
    fn technology_columns_are_round_robin() {
        let columns = technology_columns(4);

        assert_eq!(columns.iter().map(Vec::len).collect::<Vec<_>>(), vec![4, 3, 3, 3]);
        assert_eq!(columns[1][0].name, "CSS 3");
        assert_eq!(columns[0][1].name, "React JS");
    }
}
