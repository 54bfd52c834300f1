//! General rules: greetings, design work, background, contact and small talk.

pub(super) const RULES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi", "hey", "greetings"],
        "Good day! I'm iXiA mini, {owner}'s digital assistant. How may I help you explore his data analytics and design expertise today?",
    ),
    (
        &["how are you", "how's it going", "what's up"],
        "I'm functioning optimally! I'd be happy to tell you about {owner}'s projects, skills in data analytics, or help you navigate his portfolio. What are you most interested in learning about?",
    ),
    (
        &["design", "graphic design", "visual design"],
        "{owner} has substantial experience in graphic design with a Diploma from AMDT College. His design approach emphasizes clean aesthetics and meaningful communication. This background uniquely enhances his data visualization work, allowing him to present complex information with visual clarity and impact. Would you like to see examples of his design work?",
    ),
    (
        &["adobe", "creative suite", "photoshop", "illustrator"],
        "{owner} is highly proficient in Adobe Creative Suite. His skills include Photoshop (80%), Illustrator (95%), InDesign (60%), Premiere Pro (50%), After Effects (40%), and Animate (60%). This expertise allows him to create professional graphics, layouts, and visual assets for both design projects and data visualization work.",
    ),
    (
        &["ui", "ux", "user interface", "user experience"],
        "{owner} applies user interface design principles in both his web development and data visualization work. He focuses on creating intuitive, accessible interfaces that enhance user engagement with information. His approach balances aesthetic appeal with functional clarity, ensuring that interfaces serve both information and experience goals.",
    ),
    (
        &["brand", "branding", "identity"],
        "{owner} has created comprehensive brand identities for various clients, developing cohesive visual systems including logos, color palettes, typography, and brand guidelines. His Brand Identity Design projects demonstrate his ability to translate brand values and positioning into compelling visual expressions.",
    ),
    (
        &["vortixa", "website", "web development"],
        "The Vortixa Website project showcases {owner}'s web development skills. Using HTML5, CSS3, and JavaScript, he created a responsive, modern website for this IT services company. The site features smooth animations, mobile-friendly design, and optimized performance. The project demonstrates his ability to blend technical implementation with compelling visual design.",
    ),
    (
        &["education", "study", "degree", "qualifications"],
        "{owner} is currently pursuing a Higher National Diploma in Data Analytics at Esoft Metro Campus (2024-Present). His educational background includes a Diploma in Information Technology from ICBT Campus (2017) and a Diploma in Graphic Design from AMDT College (2019). This multidisciplinary education combines technical and creative foundations, positioning him uniquely at the intersection of data and design.",
    ),
    (
        &["experience", "work history", "background"],
        "{owner}'s professional journey includes freelance graphic design (2018-2020), diverse creative projects (2021-2023), and design tutoring (2023-2024). He's now focusing on data analytics while leveraging his design expertise. This combination of analytical and creative experience enables him to bridge technical data work with effective visual communication.",
    ),
    (
        &["career goals", "aspirations", "future plans"],
        "{owner} aims to become a leading data analyst who excels in both technical analysis and visual storytelling. His goals include mastering advanced statistical methods and machine learning, creating innovative data visualizations, contributing to data-driven decision-making in creative industries, and eventually leading analytics initiatives. He's committed to continuous learning in this rapidly evolving field.",
    ),
    (
        &["contact", "reach", "get in touch", "hire"],
        "You can reach {owner} via email, LinkedIn or GitHub; the links are on the Contact page, which also includes a form to send messages directly. He's open to discussing freelance projects, collaboration opportunities, and permanent positions.",
    ),
    (
        &["freelance", "hire", "collaboration", "work with"],
        "{owner} is available for freelance projects and collaborations in data analytics, data visualization, and graphic design. His multidisciplinary skill set makes him ideal for projects requiring both analytical rigor and visual communication. For inquiries about rates, availability, or specific project needs, please use the contact form.",
    ),
    (
        &["portfolio", "website", "site"],
        "You're currently exploring {owner}'s portfolio website, which showcases his data analytics and design capabilities. The site features sections on his skills, projects, background, and contact information. The futuristic, interactive design reflects his aesthetic sensibilities. Is there a particular section you'd like me to help you navigate to?",
    ),
    (
        &["joke", "funny", "laugh"],
        "Why don't data scientists get invited to parties? Because they're too busy trying to find the correlation between 'chips' and 'dips'! Would you like another data joke?",
    ),
    (
        &["who are you", "what are you", "about you"],
        "I'm Jarvis, {owner}'s AI assistant. I'm here to help you learn about his skills in data analytics and design, explore his projects, and connect if you're interested in collaboration. Unlike {owner}, I can't create stunning visualizations, but I can certainly tell you all about how he does it!",
    ),
    (
        &["thank you", "thanks"],
        "You're welcome! I'm always here to help showcase {owner}'s data analytics and design expertise. If you have more questions later or want to discuss a potential project, feel free to use the contact form. Wishing you a data-driven day!",
    ),
    (
        &["bye", "goodbye", "later"],
        "Thank you for exploring {owner}'s portfolio! If you'd like to see his work in action or discuss potential collaborations, don't hesitate to reach out through the contact form. Have a great day, and may your datasets always be clean and your visualizations insightful!",
    ),
    (
        &["technical skills", "tech skills", "what can you do"],
        "{owner}'s key technical skills include: data analysis with Python (Pandas, NumPy) and SQL, data visualization (Plotly, Tableau), statistical analysis, basic machine learning, Adobe Creative Suite (Photoshop 80%, Illustrator 95%), web development (HTML 90%, CSS 60%, JavaScript 20%), and database management. Would you like more details about any specific skill area?",
    ),
    (
        &["languages", "programming languages", "coding"],
        "{owner} is proficient in several programming and markup languages, including Python (50%) for data analysis, SQL (40%) for database queries, C# (30%) for application development, HTML (90%) and CSS (60%) for web development, and JavaScript (20%) for interactive elements. These technical skills complement his analytical and design capabilities.",
    ),
    (
        &["unknown", "not sure", "confused"],
        "I'm not quite sure I understood your question about {owner}'s data analytics and design work. Could you rephrase? I'm happy to tell you about his technical skills, projects, visualization expertise, or how to get in touch for collaboration opportunities.",
    ),
    (
        &["default"],
        "That's an interesting question! While I don't have specific information about that, I'd be happy to tell you about {owner}'s data analytics skills, design work, or ongoing projects. Or would you prefer information about contacting him for collaboration opportunities?",
    ),
];
