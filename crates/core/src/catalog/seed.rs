use crate::catalog::CatalogError;
use crate::model::{
    Question, QuestionId, QuestionKind, Topic, TopicId, parse_competency_tags,
};

struct TopicSeed {
    week: u32,
    day: u32,
    title: &'static str,
    description: &'static str,
    tags: &'static str,
    content: &'static str,
}

struct QuestionSeed {
    topic: u64,
    prompt: &'static str,
    options: [&'static str; 4],
    correct: &'static str,
}

const TOPICS: [TopicSeed; 6] = [
    TopicSeed {
        week: 1,
        day: 1,
        title: "Pump Types and Fundamentals",
        description: "Centrifugal and Positive Displacement Pumps",
        tags: "PC1.1, PC2.3, PC2.4",
        content: "Basic principles, construction, and applications of different pump types.",
    },
    TopicSeed {
        week: 2,
        day: 2,
        title: "Compressor Types and Components",
        description: "Centrifugal and Positive Displacement Compressors",
        tags: "PC1.1, PC2.1, PC2.2",
        content: "Compressor types, components, and operating principles.",
    },
    TopicSeed {
        week: 3,
        day: 3,
        title: "Measurement Devices",
        description: "Pressure, Flow, and Temperature Measurement",
        tags: "PC4.1, PC1.2",
        content: "Measurement devices including pressure gauges, transducers, and Venturi tubes.",
    },
    TopicSeed {
        week: 4,
        day: 4,
        title: "Safety Procedures",
        description: "Startup, Shutdown and Safety Protocols",
        tags: "PC1.3, PC3.1",
        content: "Safe operation procedures and common fault diagnosis.",
    },
    TopicSeed {
        week: 5,
        day: 5,
        title: "Cavitation and Pump Safety",
        description: "Pressure Management and Cavitation Effects",
        tags: "PC3.2, PC3.3",
        content: "Cavitation causes, effects, and prevention methods.",
    },
    TopicSeed {
        week: 6,
        day: 7,
        title: "Performance Calculations",
        description: "Power, Efficiency and Performance Analysis",
        tags: "PC4.2, PC4.3, PC4.4, PC4.5, PC4.6",
        content: "Power calculations, efficiency curves, and performance analysis.",
    },
];

const QUESTIONS: [QuestionSeed; 30] = [
    // Pump Types and Fundamentals
    QuestionSeed {
        topic: 1,
        prompt: "Which pump type uses an impeller to move fluid?",
        options: ["Centrifugal Pump", "Piston Pump", "Gear Pump", "Diaphragm Pump"],
        correct: "Centrifugal Pump",
    },
    QuestionSeed {
        topic: 1,
        prompt: "What is the main function of a pump?",
        options: [
            "Increase fluid pressure",
            "Generate electricity",
            "Cool the fluid",
            "Filter contaminants",
        ],
        correct: "Increase fluid pressure",
    },
    QuestionSeed {
        topic: 1,
        prompt: "Which component in a centrifugal pump converts velocity energy to pressure energy?",
        options: ["Impeller", "Volute Casing", "Shaft", "Seal"],
        correct: "Volute Casing",
    },
    QuestionSeed {
        topic: 1,
        prompt: "What type of pump is best for high viscosity fluids?",
        options: [
            "Centrifugal Pump",
            "Positive Displacement Pump",
            "Jet Pump",
            "Turbine Pump",
        ],
        correct: "Positive Displacement Pump",
    },
    QuestionSeed {
        topic: 1,
        prompt: "The efficiency of a centrifugal pump is highest at:",
        options: [
            "Best Efficiency Point (BEP)",
            "Shut-off head",
            "Run-out point",
            "All operating points",
        ],
        correct: "Best Efficiency Point (BEP)",
    },
    // Compressor Types and Components
    QuestionSeed {
        topic: 2,
        prompt: "Which compressor type is best for high-pressure applications?",
        options: [
            "Centrifugal Compressor",
            "Rotary Screw Compressor",
            "Reciprocating Compressor",
            "Axial Compressor",
        ],
        correct: "Reciprocating Compressor",
    },
    QuestionSeed {
        topic: 2,
        prompt: "What is the purpose of an intercooler in a multi-stage compressor?",
        options: [
            "Reduce power consumption",
            "Increase final pressure",
            "Cool the gas between stages",
            "Lubricate moving parts",
        ],
        correct: "Cool the gas between stages",
    },
    QuestionSeed {
        topic: 2,
        prompt: "Which compressor type provides continuous, pulsation-free flow?",
        options: [
            "Reciprocating Compressor",
            "Centrifugal Compressor",
            "Diaphragm Compressor",
            "Rotary Vane Compressor",
        ],
        correct: "Centrifugal Compressor",
    },
    QuestionSeed {
        topic: 2,
        prompt: "The clearance volume in a reciprocating compressor affects:",
        options: [
            "Volumetric efficiency",
            "Motor speed",
            "Lubrication requirements",
            "Noise level",
        ],
        correct: "Volumetric efficiency",
    },
    QuestionSeed {
        topic: 2,
        prompt: "What safety device is essential on all air compressor receivers?",
        options: [
            "Pressure relief valve",
            "Temperature gauge",
            "Flow meter",
            "Moisture separator",
        ],
        correct: "Pressure relief valve",
    },
    // Measurement Devices
    QuestionSeed {
        topic: 3,
        prompt: "What does a Venturi tube measure?",
        options: ["Pressure", "Temperature", "Flow rate", "Viscosity"],
        correct: "Flow rate",
    },
    QuestionSeed {
        topic: 3,
        prompt: "Which device converts pressure into an electrical signal?",
        options: [
            "Pressure Gauge",
            "Pressure Transducer",
            "Manometer",
            "Bourdon Tube",
        ],
        correct: "Pressure Transducer",
    },
    QuestionSeed {
        topic: 3,
        prompt: "What principle does a Venturi tube operate on?",
        options: [
            "Bernoulli's principle",
            "Pascal's principle",
            "Archimedes' principle",
            "Newton's law",
        ],
        correct: "Bernoulli's principle",
    },
    QuestionSeed {
        topic: 3,
        prompt: "Which temperature sensor uses resistance change with temperature?",
        options: ["Thermocouple", "RTD", "Bimetallic strip", "Infrared sensor"],
        correct: "RTD",
    },
    QuestionSeed {
        topic: 3,
        prompt: "A Bourdon tube is typically used in:",
        options: [
            "Flow meters",
            "Pressure gauges",
            "Temperature sensors",
            "Level indicators",
        ],
        correct: "Pressure gauges",
    },
    // Safety Procedures
    QuestionSeed {
        topic: 4,
        prompt: "What should you check before starting a pump?",
        options: [
            "Lubrication levels",
            "Weather conditions",
            "Operator certification",
            "Manufacturer name",
        ],
        correct: "Lubrication levels",
    },
    QuestionSeed {
        topic: 4,
        prompt: "The correct sequence for pump startup is:",
        options: [
            "Open discharge, start pump, open suction",
            "Start pump, open suction, open discharge",
            "Open suction, start pump, open discharge",
            "Open suction, open discharge, start pump",
        ],
        correct: "Open suction, start pump, open discharge",
    },
    QuestionSeed {
        topic: 4,
        prompt: "What is the purpose of a safety valve?",
        options: [
            "Control flow rate",
            "Measure pressure",
            "Prevent overpressure",
            "Indicate temperature",
        ],
        correct: "Prevent overpressure",
    },
    QuestionSeed {
        topic: 4,
        prompt: "Lockout-Tagout procedures are used for:",
        options: [
            "Increasing efficiency",
            "Energy isolation during maintenance",
            "Speed control",
            "Performance testing",
        ],
        correct: "Energy isolation during maintenance",
    },
    QuestionSeed {
        topic: 4,
        prompt: "Before working on a pump, you should:",
        options: [
            "Drain the fluid",
            "Increase pressure",
            "Run at maximum speed",
            "Check weather forecast",
        ],
        correct: "Drain the fluid",
    },
    // Cavitation and Pump Safety
    QuestionSeed {
        topic: 5,
        prompt: "What causes cavitation in pumps?",
        options: [
            "High suction pressure",
            "Low suction pressure",
            "High discharge pressure",
            "Low fluid viscosity",
        ],
        correct: "Low suction pressure",
    },
    QuestionSeed {
        topic: 5,
        prompt: "The formation and collapse of vapor bubbles in a pump is called:",
        options: ["Aeration", "Cavitation", "Turbulence", "Laminar flow"],
        correct: "Cavitation",
    },
    QuestionSeed {
        topic: 5,
        prompt: "What does NPSH stand for?",
        options: [
            "Net Positive Suction Head",
            "Negative Pressure System Head",
            "Normal Pump Suction Height",
            "National Pump Safety Handbook",
        ],
        correct: "Net Positive Suction Head",
    },
    QuestionSeed {
        topic: 5,
        prompt: "Which symptom indicates cavitation?",
        options: [
            "Smooth operation",
            "Reduced noise",
            "Knocking sounds",
            "Increased flow",
        ],
        correct: "Knocking sounds",
    },
    QuestionSeed {
        topic: 5,
        prompt: "To prevent cavitation, you should:",
        options: [
            "Increase suction lift",
            "Reduce NPSH available",
            "Increase fluid temperature",
            "Reduce suction line restrictions",
        ],
        correct: "Reduce suction line restrictions",
    },
    // Performance Calculations
    QuestionSeed {
        topic: 6,
        prompt: "What is the formula for pump efficiency?",
        options: [
            "(Output Power / Input Power) × 100%",
            "(Input Power / Output Power) × 100%",
            "Output Power - Input Power",
            "Input Power × Output Power",
        ],
        correct: "(Output Power / Input Power) × 100%",
    },
    QuestionSeed {
        topic: 6,
        prompt: "Hydraulic power is calculated using:",
        options: [
            "Flow rate and pressure",
            "Speed and torque",
            "Voltage and current",
            "Temperature and density",
        ],
        correct: "Flow rate and pressure",
    },
    QuestionSeed {
        topic: 6,
        prompt: "The pressure ratio in compressors is defined as:",
        options: ["P1/P2", "P2/P1", "(P1+P2)/2", "P2-P1"],
        correct: "P2/P1",
    },
    QuestionSeed {
        topic: 6,
        prompt: "What does a pump characteristic curve show?",
        options: [
            "Pump performance at different flow rates",
            "Pump material composition",
            "Pump manufacturing date",
            "Pump cost analysis",
        ],
        correct: "Pump performance at different flow rates",
    },
    QuestionSeed {
        topic: 6,
        prompt: "Volumetric efficiency in compressors compares:",
        options: [
            "Actual flow to theoretical flow",
            "Input power to output power",
            "Pressure ratio to temperature ratio",
            "Speed to torque",
        ],
        correct: "Actual flow to theoretical flow",
    },
];

/// Materialises the literal course data. Ids are assigned sequentially from 1,
/// matching a freshly created store.
pub(super) fn build() -> Result<(Vec<Topic>, Vec<Question>), CatalogError> {
    let mut topics = Vec::with_capacity(TOPICS.len());
    for (id, seed) in (1_u64..).zip(TOPICS.iter()) {
        topics.push(Topic::new(
            TopicId::new(id),
            seed.week,
            seed.day,
            seed.title,
            seed.description,
            parse_competency_tags(seed.tags),
            seed.content,
        )?);
    }

    let mut questions = Vec::with_capacity(QUESTIONS.len());
    for (id, seed) in (1_u64..).zip(QUESTIONS.iter()) {
        questions.push(Question::new(
            QuestionId::new(id),
            TopicId::new(seed.topic),
            seed.prompt,
            seed.options.iter().map(|o| (*o).to_owned()).collect(),
            seed.correct,
            QuestionKind::SingleChoice,
        )?);
    }

    Ok((topics, questions))
}
