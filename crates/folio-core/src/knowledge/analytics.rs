//! Data analytics rules: practice, tools, projects and methodology.

pub(super) const RULES: &[(&[&str], &str)] = &[
    (
        &["data analytics", "data analysis", "analytics", "analyze data"],
        "{owner} specializes in data analytics, transforming complex datasets into actionable insights. He's proficient in Python, SQL, and statistical analysis. His analytics approach combines technical precision with visual storytelling to make data accessible and impactful. Would you like to see specific data analytics projects he's worked on?",
    ),
    (
        &["data visualization", "visualize data", "charts", "graphs", "dashboard"],
        "Data visualization is where {owner}'s analytics and design skills converge. He creates interactive dashboards and visual narratives that make complex data intuitive and compelling. He uses tools like Plotly, Tableau, and custom Python visualizations to transform numbers into visual stories. His E-commerce Analytics Tool project is a great example of this work.",
    ),
    (
        &["python", "pandas", "numpy", "jupyter"],
        "{owner} uses Python extensively in his data analysis workflow. He's skilled with essential libraries like Pandas for data manipulation, NumPy for numerical analysis, and various visualization libraries. His approach typically involves exploratory data analysis, statistical modeling, and creating reproducible research in Jupyter notebooks. Would you like to see Python-specific projects?",
    ),
    (
        &["sql", "database", "queries"],
        "{owner} is experienced with SQL for data extraction and analysis. He can write complex queries to aggregate and analyze data from relational databases. He's used SQL in projects like the Leave Management System and E-commerce Analytics Tool, working with both transaction and analytical databases. Need more specific information about his SQL expertise?",
    ),
    (
        &["machine learning", "ml", "algorithms", "ai"],
        "{owner} has foundational knowledge in machine learning, focusing on practical applications for business problems. His skills include basic regression, classification, and clustering models. While he's still developing advanced ML expertise as part of his data analytics studies, he approaches these techniques with a critical thinking mindset, focusing on interpretability and business value.",
    ),
    (
        &["statistical", "statistics", "analysis"],
        "Statistical analysis is central to {owner}'s data approach. He's knowledgeable about descriptive statistics, hypothesis testing, correlation analysis, and regression modeling. He ensures statistical soundness in his data projects, balancing technical rigor with clear communication of findings for non-technical stakeholders.",
    ),
    (
        &["tableau", "power bi", "data tools"],
        "{owner} is skilled with data visualization platforms like Tableau, which he used in his E-commerce Analytics Tool project. His background in design gives him an edge in creating dashboards that are both insightful and visually appealing. He focuses on creating interactive visualizations that allow stakeholders to explore data and discover insights themselves.",
    ),
    (
        &["leave management", "leave system"],
        "The Leave Management System was developed for Grifindor Toys using C#, SQL, and WinForms. This enterprise application streamlined the leave request workflow, improving efficiency by 40% and employee satisfaction. The system features automated approval routing, leave balance tracking, and analytical reporting for HR management.",
    ),
    (
        &["colonist", "colonist management", "space"],
        "The Colonist Management Software, created for E-Space Solutions, is a resource planning system for space colonization simulations. Built with Python, SQLite, and Tkinter, it helps manage personnel schedules, resource allocation, and habitat systems. The software includes predictive modeling for resource consumption and interactive visualization of colony metrics.",
    ),
    (
        &["visualization dashboard", "data dashboard"],
        "{owner}'s Data Visualization Dashboard project transformed complex datasets into interactive, user-friendly visualizations. Built with Python, Pandas, and Plotly, this dashboard enables stakeholders to explore data through customizable views and filters. The project demonstrates his ability to make data accessible and actionable through thoughtful visual design and technical implementation.",
    ),
    (
        &["e-commerce", "retail", "sales analytics"],
        "The E-commerce Analytics Tool analyzes customer behavior and sales trends for online retailers. Developed using Python, SQL, and Tableau, it provides insights on customer segments, purchase patterns, and product performance. The tool includes predictive features for inventory planning and marketing optimization, demonstrating {owner}'s ability to deliver business value through data analysis.",
    ),
    (
        &["data project", "analytics project", "case study"],
        "{owner} has worked on several data analytics projects, including: an E-commerce Analytics Tool that increased sales conversion by 15%, a Data Visualization Dashboard that reduced decision-making time by 30%, and predictive models for inventory management. Which type of analytics project are you most interested in hearing about?",
    ),
    (
        &["business intelligence", "bi", "reporting"],
        "{owner} approaches Business Intelligence as the bridge between raw data and strategic decision-making. He creates analytical reports and dashboards that translate complex metrics into actionable insights. His work emphasizes self-service BI tools that empower stakeholders to explore data independently while maintaining analytical rigor in the underlying data modeling.",
    ),
    (
        &["data ethics", "privacy", "responsible"],
        "{owner} is committed to ethical data practices, including privacy protection, transparent methodology, and avoiding biased analysis. He believes responsible data use builds trust and creates sustainable value. In his projects, he implements data anonymization, clear documentation of assumptions, and careful consideration of the societal implications of analytical work.",
    ),
    (
        &["big data", "large datasets", "data processing"],
        "While continuing to develop his big data skills, {owner} understands the principles of working with large datasets. He focuses on efficient data processing techniques, appropriate sampling methods, and scalable visualization approaches. He's currently expanding his knowledge of distributed computing tools and cloud-based analytics platforms through his data analytics program.",
    ),
    (
        &["data methodology", "data process", "analytics approach"],
        "{owner} follows a structured data analytics methodology: 1) Problem Definition - clarifying business questions, 2) Data Collection & Cleaning - ensuring quality and relevance, 3) Exploratory Analysis - discovering patterns and relationships, 4) Advanced Analysis - applying statistical methods, 5) Visualization & Communication - translating findings into actionable insights. This systematic approach ensures rigorous analysis with business-relevant outcomes.",
    ),
    (
        &["data cleaning", "data preparation", "preprocessing"],
        "{owner} understands that data cleaning is often 80% of a data project. He's experienced in handling missing values, outlier detection, data normalization, and feature engineering. His approach emphasizes documentation of cleaning steps for reproducibility. He uses Python's Pandas for transformations and maintains data quality through automated validation checks.",
    ),
    (
        &["data sources", "data collection", "data gathering"],
        "{owner} works with diverse data sources including relational databases, CSV files, APIs, and web scraping. He emphasizes proper data collection planning to ensure representativeness and relevance to business questions. For the E-commerce Analytics Tool, he integrated customer transaction data, website behavior logs, and product information to create a comprehensive analytical view.",
    ),
    (
        &["data tools", "analytics tools", "software"],
        "{owner}'s technical toolkit includes: Python with Pandas, NumPy, Matplotlib, and Plotly for analysis and visualization; SQL for database queries; Tableau for interactive dashboards; Excel for quick analysis; Git for version control; and Jupyter Notebooks for reproducible research. He continues expanding his toolset through his data analytics studies, focusing on tools that enable efficient, insightful analysis.",
    ),
    (
        &["exploratory data analysis", "eda", "data exploration"],
        "Exploratory Data Analysis is central to {owner}'s approach. He starts by understanding variable distributions, identifying patterns and correlations, and generating initial hypotheses. He uses visualization techniques extensively during EDA to reveal insights that might be missed in purely numerical analysis. This exploratory phase informs his subsequent statistical modeling and ensures analysis directions align with the data's natural patterns.",
    ),
    (
        &["excel", "spreadsheet", "spreadsheet analysis"],
        "While {owner} focuses on programmatic analysis with Python and SQL for scalability, he's also proficient with Excel for quick analyses and stakeholder-friendly outputs. He's skilled with pivot tables, VLOOKUP functions, and Excel's analytical tools. For smaller datasets or initial explorations, Excel remains a valuable tool in his workflow, complementing his more advanced technical approaches.",
    ),
    (
        &["predictive analytics", "prediction", "forecasting"],
        "{owner}'s approach to predictive analytics combines statistical methods with business context. He's worked with time series analysis for forecasting, regression models for outcome prediction, and classification algorithms for category prediction. His focus is on creating interpretable models that balance accuracy with practical usability, ensuring predictions can be easily understood and applied by decision-makers.",
    ),
    (
        &["descriptive analytics", "business metrics", "kpis"],
        "{owner} excels at descriptive analytics, transforming raw data into meaningful business metrics and KPIs. In his E-commerce Analytics Tool, he designed comprehensive dashboards showing customer acquisition costs, lifetime value, conversion rates, and product performance metrics. He focuses on creating clear, actionable metrics that align with strategic goals and provide actionable insights.",
    ),
    (
        &["segmentation", "clustering", "customer segments"],
        "In the E-commerce Analytics Tool project, {owner} implemented customer segmentation using clustering algorithms to identify distinct customer groups based on purchase behavior, preferences, and engagement patterns. This allowed for targeted marketing strategies and personalized customer experiences. His approach combines algorithmic segmentation with business logic to ensure segments are both statistically valid and commercially meaningful.",
    ),
    (
        &["visualization principles", "data viz principles", "visualization best practices"],
        "{owner} applies key data visualization principles in his work: 1) Focus on the core message, 2) Choose appropriate chart types for the data, 3) Minimize clutter and maximize data-to-ink ratio, 4) Use color purposefully, 5) Design for the intended audience, and 6) Enable interactive exploration when beneficial. His background in design enhances his visualizations, making complex data accessible without sacrificing accuracy.",
    ),
    (
        &["interactive dashboards", "interactive visualizations"],
        "{owner} creates interactive dashboards that allow users to explore data dynamically. His Data Visualization Dashboard project features filters, drill-down capabilities, and parameterized views that enable users to answer their own questions through data exploration. He balances guided insights with exploratory freedom, ensuring dashboards are both informative and engaging for both technical and non-technical users.",
    ),
    (
        &["data storytelling", "narrative visualization", "storytelling with data"],
        "Data storytelling is where {owner}'s analytics and design backgrounds converge most powerfully. He crafts data narratives that guide audiences through insights in a compelling, structured way. This involves sequencing visualizations logically, highlighting key patterns, providing necessary context, and creating a cohesive flow that leads to actionable conclusions.",
    ),
    (
        &["business impact", "data roi", "business value"],
        "{owner} focuses on generating tangible business impact from data. His E-commerce Analytics Tool helped increase customer retention by 18% through targeted interventions, while his inventory analysis reduced stockouts by 25%. He approaches every project with a clear understanding of business objectives, ensuring analyses directly address key performance indicators and deliver measurable return on investment.",
    ),
    (
        &["decision making", "data-driven decisions"],
        "{owner} believes effective data analytics should enhance decision-making at all levels. His visualization work emphasizes clarity and actionability, helping stakeholders move quickly from insight to action. He designs analytics outputs specifically for decision support, balancing comprehensive information with focused recommendations, and adapting detail levels for different decision-makers from executives to operational teams.",
    ),
    (
        &["data strategy", "analytics strategy"],
        "While still developing expertise in organizational data strategy, {owner} understands the importance of aligning analytics work with broader business goals. He approaches projects with consideration for how they fit into the organization's data ecosystem and long-term analytics needs, focusing on sustainable solutions that build analytics capabilities rather than one-off analyses.",
    ),
    (
        &["retail analytics", "e-commerce data", "retail data"],
        "{owner} has specific experience with retail and e-commerce analytics. His E-commerce Analytics Tool project involved customer segmentation, purchase pattern analysis, product recommendation systems, and inventory optimization. He's familiar with key metrics like average order value, customer acquisition cost, and lifetime value, as well as analytical approaches for pricing optimization and market basket analysis.",
    ),
    (
        &["hr analytics", "people analytics", "workforce data"],
        "{owner}'s Leave Management System project demonstrated his capability in HR analytics. The system tracked leave patterns, identified departments with unusual absence rates, and provided predictive insights on staffing needs. While not his primary focus, this experience gave him familiarity with workforce analytics applications and HR data structures.",
    ),
    (
        &["data trends", "analytics trends", "future of data"],
        "{owner} stays current with data analytics trends including the rise of augmented analytics, responsible AI, embedded analytics in applications, and data democratization. He's particularly interested in how visualization techniques are evolving to handle increasingly complex datasets and how design principles can make advanced analytics more accessible to non-technical users.",
    ),
    (
        &["favorite visualization", "best chart", "best graph"],
        "{owner} has a particular appreciation for thoughtfully designed interactive visualizations that reveal multiple dimensions of data. While he values classic forms like well-constructed bar and line charts for their clarity, he enjoys creating more innovative forms like network diagrams, treemaps, and custom visualizations when they're appropriate for the data.",
    ),
    (
        &["data challenge", "analytics problem", "difficult data"],
        "One of {owner}'s most challenging data projects involved reconciling inconsistent customer data from multiple systems for the E-commerce Analytics Tool. He developed a robust entity resolution system that used fuzzy matching and machine learning to create a unified customer view across platforms. This challenge taught him valuable lessons about data integration and quality management in real-world environments.",
    ),
    (
        &["data mistake", "analytics error", "common mistake"],
        "{owner} believes the most common mistake in data projects is rushing to analysis without properly understanding business context and data limitations. He advocates for thorough exploratory analysis and stakeholder consultation before drawing conclusions. He's learned from experience that skipping these steps can lead to technically correct analyses that miss the actual business need.",
    ),
    (
        &["learning", "studying", "improving"],
        "As a data analytics student, {owner} is actively expanding his skills in advanced statistical methods, machine learning, and big data technologies. He takes a structured approach to learning, combining formal education with hands-on projects and independent study. Current focus areas include machine learning algorithms, cloud-based analytics platforms, and advanced data visualization techniques.",
    ),
];
