//! Hand-authored interview taxonomy. Immutable for the life of the process.

use super::{Category, Subcategory};

const fn topic(id: &'static str, name: &'static str, description: &'static str) -> Subcategory {
    Subcategory {
        id,
        name,
        description,
        difficulty: None,
    }
}

const PRODUCT_MANAGEMENT_TOPICS: &[Subcategory] = &[
    topic("product-strategy", "Product Strategy", "Vision, roadmap, and market fit questions"),
    topic("execution", "Execution", "Shipping products and feature implementation"),
    topic("analytics-metrics", "Analytics & Metrics", "KPIs, success metrics, and data-driven decisions"),
    topic("product-design", "Product Design", "User experience and design thinking"),
    topic("estimation", "Estimation", "Sizing markets and forecasting impact"),
    topic("behavioral-pm", "Behavioral", "Leadership, collaboration, and problem-solving"),
    topic("go-to-market", "Go-to-Market", "Launch strategies and market entry"),
    topic("prioritization", "Prioritization", "Feature prioritization frameworks and tradeoffs"),
    topic("stakeholder-management", "Stakeholder Management", "Working with cross-functional teams"),
];

const SOFTWARE_ENGINEER_TOPICS: &[Subcategory] = &[
    topic("data-structures", "Data Structures & Algorithms", "Problem-solving with optimal data structures"),
    topic("system-design", "System Design", "Designing scalable systems and architecture"),
    topic("coding", "Coding", "Language-specific implementation questions"),
    topic("debugging", "Debugging", "Finding and fixing issues in code"),
    topic("api-design", "API Design", "Creating effective and usable APIs"),
    topic("devops", "DevOps & Deployment", "CI/CD, infrastructure, and operations"),
    topic("security", "Security Fundamentals", "Secure coding practices and threat modeling"),
    topic("behavioral-swe", "Behavioral", "Teamwork, communication, and problem-solving"),
    topic("technical-communication", "Technical Communication", "Explaining complex concepts clearly"),
    topic("architecture", "Architecture & Scalability", "Building systems that scale and perform"),
];

const DATA_SCIENCE_TOPICS: &[Subcategory] = &[
    topic("statistics", "Statistics & Probability", "Statistical methods and probability theory"),
    topic("ml-algorithms", "Machine Learning Algorithms", "Understanding and implementing ML models"),
    topic("data-manipulation", "Data Manipulation", "SQL, Pandas, and data processing"),
    topic("experimental-design", "Experimental Design & A/B Testing", "Setting up and analyzing experiments"),
    topic("business-case", "Business Case / Product Sense", "Applying data science to business problems"),
    topic("data-visualization", "Data Visualization", "Effectively communicating insights through visuals"),
    topic("deep-learning", "Deep Learning / NLP / CV", "Advanced ML techniques and applications"),
    topic("coding-ds", "Coding (Python, R, etc.)", "Implementing data science solutions"),
    topic("behavioral-ds", "Behavioral", "Collaboration, communication, and problem-solving"),
    topic("model-evaluation", "Model Evaluation & Metrics", "Measuring and improving model performance"),
];

const UX_DESIGN_TOPICS: &[Subcategory] = &[
    topic("design-thinking", "Design Thinking", "Problem-solving through user-centered design"),
    topic("wireframing", "Wireframing & Prototyping", "Creating low and high-fidelity prototypes"),
    topic("usability-testing", "Usability Testing", "Evaluating designs with real users"),
    topic("visual-design", "Visual Design & Aesthetics", "Creating visually appealing interfaces"),
    topic("ux-research", "UX Research", "Understanding user needs and behaviors"),
    topic("accessibility", "Accessibility", "Designing for all users regardless of ability"),
    topic("behavioral-ux", "Behavioral", "Collaboration, communication, and problem-solving"),
    topic("design-systems", "Design Systems", "Creating consistent design languages"),
    topic("developer-collaboration", "Collaboration with Developers", "Working effectively with engineering teams"),
];

const MARKETING_TOPICS: &[Subcategory] = &[
    topic("market-research", "Market Research", "Understanding market trends and customer needs"),
    topic("campaign-execution", "Campaign Execution", "Planning and implementing marketing campaigns"),
    topic("performance-metrics", "Performance Metrics", "Measuring marketing effectiveness and ROI"),
    topic("channel-strategy", "Channel Strategy", "Selecting and optimizing marketing channels"),
    topic("content-seo", "Content & SEO", "Creating effective content and optimizing for search"),
    topic("ab-testing-marketing", "A/B Testing", "Testing and optimizing marketing materials"),
    topic("customer-acquisition", "Customer Acquisition", "Strategies for acquiring and retaining customers"),
    topic("behavioral-marketing", "Behavioral", "Collaboration, communication, and problem-solving"),
];

const PROJECT_MANAGEMENT_TOPICS: &[Subcategory] = &[
    topic("planning", "Planning & Scheduling", "Creating and managing project timelines"),
    topic("risk-management", "Risk Management", "Identifying and mitigating project risks"),
    topic("stakeholder-communication", "Stakeholder Communication", "Effectively communicating with stakeholders"),
    topic("cross-functional", "Cross-functional Collaboration", "Working with diverse teams and departments"),
    topic("metrics-reporting", "Metrics & Reporting", "Tracking and communicating project progress"),
    topic("agile-scrum", "Agile / Scrum", "Implementing agile methodologies"),
    topic("resource-allocation", "Resource Allocation", "Managing team members and budgets"),
    topic("behavioral-pm", "Behavioral", "Leadership, communication, and problem-solving"),
];

const ACCOUNTING_TOPICS: &[Subcategory] = &[
    topic("financial-reporting", "Financial Reporting", "Preparing and analyzing financial statements"),
    topic("tax-compliance", "Tax Compliance", "Understanding tax laws and regulations"),
    topic("auditing", "Auditing", "Examining financial records and controls"),
    topic("accounting-principles", "Accounting Principles", "GAAP, IFRS, and accounting fundamentals"),
    topic("financial-analysis", "Financial Analysis", "Analyzing financial data for decision-making"),
    topic("behavioral-accounting", "Behavioral", "Ethics, communication, and problem-solving"),
];

const HEALTHCARE_TOPICS: &[Subcategory] = &[
    topic("clinical-knowledge", "Clinical Knowledge", "Medical expertise and diagnosis"),
    topic("patient-care", "Patient Care", "Treatment planning and patient interaction"),
    topic("medical-ethics", "Medical Ethics", "Ethical considerations in healthcare"),
    topic("healthcare-regulations", "Healthcare Regulations", "Understanding healthcare laws and policies"),
    topic("behavioral-healthcare", "Behavioral", "Communication, teamwork, and problem-solving"),
];

static CATEGORIES: &[Category] = &[
    Category {
        id: "product-management",
        name: "Product Management",
        description: "Product strategy, prioritization, and execution",
        subcategories: PRODUCT_MANAGEMENT_TOPICS,
    },
    Category {
        id: "software-engineer",
        name: "Software Engineering",
        description: "Technical coding questions, system design, and problem-solving",
        subcategories: SOFTWARE_ENGINEER_TOPICS,
    },
    Category {
        id: "data-science",
        name: "Data Science / Machine Learning",
        description: "Statistical analysis, machine learning, and data visualization",
        subcategories: DATA_SCIENCE_TOPICS,
    },
    Category {
        id: "ux-design",
        name: "UX/UI & Product Design",
        description: "User experience, interface design, and design thinking",
        subcategories: UX_DESIGN_TOPICS,
    },
    Category {
        id: "marketing",
        name: "Marketing / Growth",
        description: "Market research, campaign execution, and customer acquisition",
        subcategories: MARKETING_TOPICS,
    },
    Category {
        id: "project-management",
        name: "Project / Program Management",
        description: "Planning, execution, and stakeholder management",
        subcategories: PROJECT_MANAGEMENT_TOPICS,
    },
    Category {
        id: "accounting",
        name: "Accounting",
        description: "Financial reporting, tax compliance, and accounting principles",
        subcategories: ACCOUNTING_TOPICS,
    },
    Category {
        id: "healthcare",
        name: "Healthcare",
        description: "Clinical knowledge, patient care, and medical ethics",
        subcategories: HEALTHCARE_TOPICS,
    },
];

pub fn all() -> &'static [Category] {
    CATEGORIES
}
