//! Static biographical content rendered by the pages and fed to the chat
//! assistant's system prompt.

use chrono::{Datelike, NaiveDate};

pub const OWNER_NAME: &str = "Mathéo Gonnet";
pub const OWNER_FIRST_NAME: &str = "Mathéo";
pub const OWNER_EMAIL: &str = "matheo.gonnet@yahoo.fr";
pub const GITHUB_URL: &str = "https://github.com/matheogonnet";
pub const GITHUB_HANDLE: &str = "github.com/matheogonnet";
pub const LINKEDIN_URL: &str = "https://linkedin.com/in/matheo-gonnet";
pub const LINKEDIN_HANDLE: &str = "linkedin.com/in/matheo-gonnet";
pub const RESUME_FR: &str = "/documents/gonnet_matheo_cv_fr.pdf";
pub const RESUME_EN: &str = "/documents/gonnet_matheo_cv_en.pdf";
pub const LOGO: &str = "/images/matheo-gonnet-typo.png";
pub const FAVICON: &str = "/favicon.svg";

pub const LANGUAGES: &str = "French (native), English (fluent)";

pub fn birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2002, 4, 11).expect("birth date is a valid calendar date")
}

/// Age in whole years on `today`.
pub fn age_on(today: NaiveDate) -> u32 {
    let born = birth_date();
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

pub const TECHNICAL_SKILLS: &[&str] = &[
    "Python",
    "R",
    "C",
    "C++",
    "Java",
    "JavaScript",
    "HTML",
    "CSS",
    "SQL (MySQL)",
    "NoSQL (MongoDB, Elasticsearch)",
    "Power BI",
    "Apache Spark (Databricks)",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "GitHub",
    "Machine Learning",
    "Deep Learning",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Strong Communication Skills",
    "Public Speaking",
    "Team Collaboration",
    "Project Management",
    "Autonomy",
    "Curiosity",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub school: &'static str,
    pub period: &'static str,
    pub degree: &'static str,
    pub link: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        school: "ECE Paris",
        period: "2020-2025",
        degree: "Master in Engineering, specializing in Data & AI",
        link: "https://www.ece.fr/",
    },
    Education {
        school: "University of Malta",
        period: "2023",
        degree: "Semester abroad focusing on Machine Learning and Discrete Mathematics",
        link: "https://www.um.edu.mt/",
    },
    Education {
        school: "Lycée Pierre Termier",
        period: "2020",
        degree: "Scientific Baccalaureate with Honors",
        link: "https://www.etablissement-pierretermier.com/",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interest {
    pub name: &'static str,
    pub details: &'static str,
    pub icon: &'static str,
}

pub const INTERESTS: &[Interest] = &[
    Interest {
        name: "Music",
        details: "Piano and Guitar",
        icon: "🎹",
    },
    Interest {
        name: "Motorsports",
        details: "Formula 1",
        icon: "🏎️",
    },
    Interest {
        name: "Sports",
        details: "Badminton, Football",
        icon: "🏸",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub year: &'static str,
    /// One-line summary used by the chat assistant.
    pub summary: &'static str,
    pub description: &'static [&'static str],
    pub icon: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Full-Stack Engineer Intern",
        company: "Bouygues Telecom",
        year: "2024",
        summary: "Developed a full-stack automation tool for generating PowerPoint presentations and integrating real-time KPIs.",
        description: &[
            "Developed a full-stack web tool that automated the creation of PowerPoint presentations, reducing preparation time by over 95%.",
            "Integrated REST APIs for real-time retrieval and parsing of 50+ KPIs.",
            "Designed a scalable SQL database to manage and process large datasets.",
            "Created an intuitive UI/UX that was fully adopted by the management teams.",
            "Utilized technologies such as Python, Next.js, SQL, and Docker.",
        ],
        icon: "💼",
    },
    Experience {
        title: "Store Assistant",
        company: "Carrefour City",
        year: "2022-2023",
        summary: "Managed inventory and provided customer service in a retail environment.",
        description: &[
            "Assisted in managing store inventory and ensuring product availability.",
            "Provided customer support in a fast-paced environment.",
            "Developed skills in organization, communication, and teamwork.",
            "Gained experience in handling day-to-day operations efficiently.",
        ],
        icon: "💼",
    },
    Experience {
        title: "Bicycle Delivery Rider",
        company: "Gorillas",
        year: "2021-2022",
        summary: "Delivered goods efficiently while improving time management and customer service skills.",
        description: &[
            "Delivered goods to customers promptly and accurately.",
            "Enhanced skills in time management, navigation, and problem-solving.",
            "Worked independently and adapted to dynamic environments.",
        ],
        icon: "🚲",
    },
    Experience {
        title: "Volunteer Youth Leader",
        company: "Scouts & Guides of France",
        year: "2012-2022",
        summary: "Led community service projects and youth educational activities.",
        description: &[
            "Planned and led community service projects and educational activities.",
            "Developed strong skills in leadership, creativity, and event organization.",
            "Fostered teamwork and collaboration among young participants.",
        ],
        icon: "👥",
    },
    Experience {
        title: "Volunteer",
        company: "Mécénat Chirurgie Cardiaque",
        year: "2023",
        summary: "Assisted with fundraising activities during a charity event.",
        description: &[
            "Assisted with fundraising activities at a Christmas charity market.",
            "Enhanced skills in organization, teamwork, and customer engagement.",
            "Contributed to raising awareness and supporting children in need of heart surgery.",
        ],
        icon: "❤️",
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "TOEIC",
    "Python for Data Analysts",
    "AWS Cloud Foundation",
    "Project Management Methods and Tools",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    /// Comma-separated, as displayed.
    pub technologies: &'static str,
    pub github_link: Option<&'static str>,
    pub icon: &'static str,
    pub category: &'static str,
    pub year: u16,
}

impl Project {
    /// Individual technologies, trimmed.
    pub fn technology_list(&self) -> impl Iterator<Item = &'static str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Predict House",
        description: "A machine learning project designed to predict real estate prices based on various property features. This project involves data preprocessing, feature engineering, and applying regression models to provide accurate price predictions.",
        technologies: "Python, Scikit-Learn, Pandas, Matplotlib",
        github_link: Some("https://github.com/matheogonnet/predict-house"),
        icon: "🏠",
        category: "Machine Learning",
        year: 2023,
    },
    Project {
        name: "Best Keyboard Layout",
        description: "This project uses a genetic algorithm to determine the most efficient keyboard layout that minimizes typing effort. By analyzing a given text corpus, it evolves layouts through mutation, crossover, and selection to optimize typing speed and comfort.",
        technologies: "Python, Genetic Algorithms, NumPy",
        github_link: Some("https://github.com/matheogonnet/best-keyboard-layout"),
        icon: "⌨️",
        category: "Algorithms",
        year: 2023,
    },
    Project {
        name: "Smart File Search",
        description: "A desktop application that allows users to search and preview files quickly. The tool supports filtering by file types and offers previews for images, texts, PDFs, code files, and videos, making file management more efficient.",
        technologies: "Python, Custom Tkinter, OS Libraries",
        github_link: Some("https://github.com/matheogonnet/smart-file-search"),
        icon: "🔍",
        category: "Desktop App",
        year: 2024,
    },
    Project {
        name: "Cluedo Board Game",
        description: "A digital adaptation of the classic Cluedo board game. This project focuses on implementing game logic, player interactions, and a graphical interface to provide an engaging mystery-solving experience.",
        technologies: "C++, SFML (Simple and Fast Multimedia Library)",
        github_link: Some("https://github.com/matheogonnet/cluedo-board-game"),
        icon: "🎲",
        category: "Game",
        year: 2021,
    },
    Project {
        name: "Buzzbox Instant Messaging",
        description: "A Java-based instant messaging application that supports real-time chat between users. This project features user authentication, message encryption, and a responsive client-server architecture.",
        technologies: "Java, MySQL, JDBC",
        github_link: Some("https://github.com/matheogonnet/buzzbox-instant-messaging"),
        icon: "💬",
        category: "Desktop App",
        year: 2022,
    },
    Project {
        name: "Ferrarinews Blogging App",
        description: "A blogging application where users can create, publish, and manage blog articles. The app includes features for commenting, liking posts, and user authentication to enhance interaction and content management.",
        technologies: "JavaScript, Next.js, Tailwind CSS, Supabase",
        github_link: Some("https://github.com/matheogonnet/ferrarinews-blogging-app"),
        icon: "📝",
        category: "Web App",
        year: 2023,
    },
    Project {
        name: "The Safe Place",
        description: "A web application developed as a group project, focusing on providing a secure platform for specific user needs. Details are limited, but the project showcases collaborative development and secure web practices.",
        technologies: "PHP, MySQL",
        github_link: Some("https://github.com/matheogonnet/the-safe-place"),
        icon: "🛡️",
        category: "Web App",
        year: 2022,
    },
    Project {
        name: "KPI Presentation Generator",
        description: "Internal tool built during the Bouygues Telecom internship that assembles PowerPoint decks from live KPI feeds. The source is proprietary, so there is no public repository.",
        technologies: "Python, Next.js, SQL, Docker",
        github_link: None,
        icon: "📊",
        category: "Web App",
        year: 2024,
    },
];

/// Lines typed into the fake terminal on the home page.
pub const CONSOLE_LINES: &[&str] = &[
    "C:\\>",
    "C:\\> cd Engineering_Student",
    "C:\\Engineering_Student> cd 22yo",
    "C:\\Engineering_Student\\22yo> Open_to_work",
];
