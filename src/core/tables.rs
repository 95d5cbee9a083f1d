// File: src/core/tables.rs
//! Built-in conversation data. Order is significant everywhere in this file:
//! the first matching topic, route, or quick response wins.

use crate::core::knowledge::{KeywordRoute, KnowledgeEntry, QuickResponse};

pub const QUICK_RESPONSES: &[QuickResponse] = &[
    QuickResponse {
        triggers: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
        reply: "Hello, eco-explorer! 🌿 What would you like to learn about today? Try asking me about solar energy, carbon footprints, or climate change.",
    },
    QuickResponse {
        triggers: &["thanks", "thank you", "thx", "cheers"],
        reply: "You're very welcome! 💚 Every question you ask is a step toward a greener planet. Anything else on your mind?",
    },
    QuickResponse {
        triggers: &["bye", "goodbye", "see you", "see ya"],
        reply: "Goodbye for now! 🌍 Keep making sustainable choices, and come back any time to keep learning.",
    },
    QuickResponse {
        triggers: &["how are you"],
        reply: "I'm feeling as fresh as a forest after the rain! 🌲 Thanks for asking. What can we explore together?",
    },
    QuickResponse {
        triggers: &["who are you", "what are you"],
        reply: "I'm EcoPal, an environmental learning companion. 🤖🌱 I know about renewable energy, climate science, sustainable living, and green technology.",
    },
    QuickResponse {
        triggers: &["what can you do"],
        reply: "I can explain environmental topics, go deeper when you ask again, and suggest what to explore next. Ask me about wind power, green hydrogen, or the circular economy! ♻️",
    },
];

pub const KNOWLEDGE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        topic: "renewable energy",
        variants: &[
            "Renewable energy comes from natural sources that replenish themselves constantly, like sunlight, wind, rain, tides, waves, and geothermal heat. Unlike fossil fuels, renewables don't run out and produce little to no greenhouse gas emissions! 🌱⚡",
            "Renewables now supply roughly 30% of the world's electricity. Solar and wind are the fastest-growing sources, and in most countries they are the cheapest new power you can build. The big challenge is matching variable supply with demand. 📈",
            "Going deeper: a high-renewable grid relies on a mix of storage (batteries, pumped hydro), demand response, long-distance transmission, and firm clean power like geothermal. Grid operators talk about 'capacity factor' and 'curtailment' when planning this mix. 🔋",
        ],
    },
    KnowledgeEntry {
        topic: "solar energy",
        variants: &[
            "Solar energy is amazing! Benefits include: zero emissions during operation, reduced electricity bills, low maintenance costs, energy independence, and it's inexhaustible. Plus, solar panel costs have dropped by 80% in the last decade! ☀️💰",
            "Photovoltaic cells turn sunlight directly into electricity using semiconductors like silicon. Rooftop panels typically convert 18-23% of sunlight into power, and they keep producing for 25-30 years. 🔆",
            "Advanced solar: perovskite-silicon tandem cells have passed 33% efficiency in the lab, and agrivoltaics lets crops grow under raised panels. Pairing solar with batteries shifts midday production into the evening peak. 🌞🔋",
        ],
    },
    KnowledgeEntry {
        topic: "wind energy",
        variants: &[
            "Wind energy harnesses the kinetic energy of moving air using wind turbines. It's one of the fastest-growing renewable energy sources! Benefits include: no fuel costs, minimal water usage, land can still be used for farming, and modern turbines are 85% recyclable. 💨🌪️",
            "Offshore wind farms capture stronger, steadier winds than on land. A single modern offshore turbine can power thousands of homes, and floating platforms are opening up deep-water sites. 🌊💨",
        ],
    },
    KnowledgeEntry {
        topic: "geothermal energy",
        variants: &[
            "Geothermal energy harnesses heat from the Earth's core for electricity and heating. It's available 24/7, has a tiny land footprint, and produces virtually no emissions. Iceland gets 25% of its electricity from geothermal! 🌋♨️",
            "Ground-source heat pumps use the steady temperature a few meters underground to heat homes in winter and cool them in summer, using 3-5 units of heat for every unit of electricity. Enhanced geothermal systems may bring deep heat to almost any region. 🏠",
        ],
    },
    KnowledgeEntry {
        topic: "ocean energy",
        variants: &[
            "Ocean energy includes wave, tidal, and thermal energy conversion. The ocean contains enough energy to power the world several times over! Tidal energy is highly predictable, and wave energy has enormous potential. 🌊⚡",
            "Tidal barrages and underwater turbines follow the moon's schedule, so their output can be forecast years ahead. The main hurdles are harsh saltwater conditions and protecting marine habitats. 🌙",
        ],
    },
    KnowledgeEntry {
        topic: "green hydrogen",
        variants: &[
            "Green hydrogen is produced using renewable energy to split water into hydrogen and oxygen. It can store renewable energy, fuel vehicles, heat homes, and power industry without emissions. It's the key to decarbonizing hard-to-electrify sectors! 💧⚡",
            "Most hydrogen today is 'grey', made from natural gas with lots of CO2. Electrolyzer costs are falling fast, and green hydrogen is most valuable for steelmaking, fertilizer, shipping fuels, and long-duration storage. 🏭",
        ],
    },
    KnowledgeEntry {
        topic: "carbon footprint",
        variants: &[
            "Great question! You can reduce your carbon footprint by: using public transport or cycling, switching to LED bulbs, eating less meat, reducing waste, using renewable energy, and conserving water. Every small action counts! 🌍♻️",
            "The average global footprint is about 4.7 tonnes of CO2 per person per year, while staying under 1.5°C means getting close to 2 tonnes by 2050. The biggest levers are usually flights, car travel, home heating, and diet. ✈️🚗",
            "To go further, measure first: footprint calculators split emissions into Scope 1 (direct), Scope 2 (purchased energy), and Scope 3 (everything you buy). Focus on the largest category, then look at switching energy suppliers and community action. 📊",
        ],
    },
    KnowledgeEntry {
        topic: "carbon capture",
        variants: &[
            "Carbon capture and storage (CCS) technology captures CO2 emissions from industrial processes and power plants, then stores it underground or uses it for other purposes. It's crucial for achieving net-zero emissions and can reduce emissions by up to 90%! 🏭💨",
            "Direct air capture pulls CO2 straight out of the atmosphere using chemical filters. It is still expensive, but combined with permanent storage in rock formations it can balance emissions that are hard to eliminate. 🪨",
        ],
    },
    KnowledgeEntry {
        topic: "climate change",
        variants: &[
            "Climate change causes rising sea levels, extreme weather events, melting ice caps, ecosystem disruption, and species extinction. But here's the good news - we can combat it through renewable energy, reforestation, and sustainable practices! 🌊🔥❄️",
            "Earth has already warmed about 1.2°C since pre-industrial times, mainly from burning fossil fuels. Every fraction of a degree matters: 2°C brings far more heatwaves, crop losses, and coral die-off than 1.5°C. 🌡️",
            "Scientists watch for tipping points such as ice-sheet collapse, permafrost thaw, and Amazon dieback, where warming could become self-reinforcing. That's why emissions need to fall about 45% by 2030 and reach net zero by 2050. ⚠️",
        ],
    },
    KnowledgeEntry {
        topic: "greenhouse effect",
        variants: &[
            "The greenhouse effect is how gases like CO2, methane, and water vapor trap heat in the atmosphere. Without it Earth would be a frozen -18°C; with too much of it, the planet warms dangerously. 🌍🔥",
            "CO2 levels have risen from 280 ppm before the industrial era to over 420 ppm today. Methane is about 80 times more potent than CO2 over 20 years, which makes cutting methane leaks one of the fastest climate wins. 🐄",
        ],
    },
    KnowledgeEntry {
        topic: "electric vehicles",
        variants: &[
            "Electric vehicles (EVs) produce zero direct emissions and are 3-4x more energy efficient than gas cars. They reduce air pollution, lower maintenance costs, and as the grid gets cleaner, EVs become even more environmentally friendly! 🚗⚡",
            "Over its lifetime, a typical EV emits far less than a petrol car even after counting battery manufacturing. Vehicle-to-grid charging could even let parked EVs act as a giant battery for the power grid. 🔌",
        ],
    },
    KnowledgeEntry {
        topic: "microgrids",
        variants: &[
            "Microgrids are small-scale, localized energy systems that can operate independently or connect to the main grid. They integrate renewable energy sources, energy storage, and smart controls to provide reliable, clean power to communities! 🔌🏘️",
            "When the main grid fails, a microgrid can 'island' itself and keep hospitals, schools, and homes running on local solar and batteries. Smart controllers balance supply and demand second by second. ⚙️",
        ],
    },
    KnowledgeEntry {
        topic: "sustainable agriculture",
        variants: &[
            "Sustainable agriculture focuses on producing food while protecting the environment through practices like crop rotation, organic farming, precision agriculture, and reducing pesticide use. It maintains soil health, conserves water, and supports biodiversity! 🌾🚜",
            "Regenerative farming goes further: cover crops, no-till planting, and managed grazing rebuild soil carbon. Food systems produce about a third of global emissions, so what we grow and eat matters enormously. 🥕",
        ],
    },
    KnowledgeEntry {
        topic: "circular economy",
        variants: &[
            "A circular economy eliminates waste by designing products to be reused, repaired, and recycled. Instead of 'take-make-dispose,' it follows 'reduce-reuse-recycle.' This approach can reduce resource consumption by 80% and create millions of jobs! ♻️🔄",
            "Circular businesses sell products as services, design for disassembly, and turn one industry's waste into another's raw material. Right to repair laws and deposit-return schemes are policy tools that speed this up. 🔧",
        ],
    },
    KnowledgeEntry {
        topic: "smart cities",
        variants: &[
            "Smart cities use IoT sensors, data analytics, and renewable energy to optimize resource use, reduce emissions, and improve quality of life. Features include smart grids, efficient transportation, green buildings, and waste management systems! 🏙️📱",
            "Examples include adaptive traffic lights that cut idling, sensors that detect water leaks, and district heating networks that reuse waste heat. Good design keeps residents' data private while improving services. 🚦",
        ],
    },
    KnowledgeEntry {
        topic: "sustainable living",
        variants: &[
            "Sustainable living includes: reducing energy consumption, recycling and composting, buying local and organic foods, using eco-friendly products, conserving water, and supporting renewable energy. It's about meeting our needs without compromising future generations! 🌿🏠",
            "Start with the big wins: home insulation, a heat pump, fewer flights, and more plant-based meals. Then build habits like repairing instead of replacing and choosing second-hand first. 🧺",
        ],
    },
    KnowledgeEntry {
        topic: "water conservation",
        variants: &[
            "Water conservation means using fresh water wisely: fixing leaks, taking shorter showers, collecting rainwater, and choosing water-efficient appliances. Only about 1% of Earth's water is accessible fresh water! 💧",
            "Most of our water footprint is hidden in food and products. A kilogram of beef can take over 15,000 liters of water, and drip irrigation can cut farm water use by up to half. 🌾💧",
        ],
    },
    KnowledgeEntry {
        topic: "biodiversity",
        variants: &[
            "Biodiversity is the variety of life on Earth, from genes to whole ecosystems. Healthy ecosystems clean our air and water, pollinate crops, and store carbon. 🐝🌳",
            "Wildlife populations have fallen by an average of 69% since 1970, mainly from habitat loss. Protecting 30% of land and sea by 2030 is a global goal to reverse this decline. 🦋",
        ],
    },
    KnowledgeEntry {
        topic: "plastic pollution",
        variants: &[
            "Plastic pollution harms wildlife and ecosystems, and around 11 million tonnes of plastic enter the ocean every year. Cutting single-use plastics is one of the easiest changes to make! 🥤🚫",
            "Microplastics now show up in soil, rain, and even human blood. Only about 9% of plastic ever made has been recycled, which is why reduction and reuse matter more than recycling alone. 🔬",
        ],
    },
    KnowledgeEntry {
        topic: "deforestation",
        variants: &[
            "Deforestation removes forests that absorb CO2 and shelter most land species. Forests are cleared mainly for cattle, soy, and palm oil. 🌳🪓",
            "Some parts of the Amazon already release more carbon than they absorb. Supporting indigenous land rights and deforestation-free supply chains are among the most effective protections. 🌿",
        ],
    },
    KnowledgeEntry {
        topic: "net zero",
        variants: &[
            "Net zero means balancing the greenhouse gases we emit with the amount we remove from the atmosphere. Most countries aim to reach it around 2050. 🎯",
            "Credible net-zero plans cut emissions deeply first and use removals only for the hardest leftovers. Watch out for targets that rely mostly on cheap offsets. 📉",
        ],
    },
    KnowledgeEntry {
        topic: "zero waste",
        variants: &[
            "Zero waste is about sending nothing to landfill: refuse what you don't need, reduce, reuse, recycle, and rot (compost) the rest. 🗑️♻️",
            "Food waste alone causes about 8% of global emissions. Planning meals, storing food well, and composting scraps are high-impact zero-waste habits. 🍎",
        ],
    },
];

pub const KEYWORD_ROUTES: &[KeywordRoute] = &[
    KeywordRoute { trigger: "turbine", topic: "wind energy" },
    KeywordRoute { trigger: "wind", topic: "wind energy" },
    KeywordRoute { trigger: "solar", topic: "solar energy" },
    KeywordRoute { trigger: "photovoltaic", topic: "solar energy" },
    KeywordRoute { trigger: "panel", topic: "solar energy" },
    KeywordRoute { trigger: "renewable", topic: "renewable energy" },
    KeywordRoute { trigger: "geothermal", topic: "geothermal energy" },
    KeywordRoute { trigger: "heat pump", topic: "geothermal energy" },
    KeywordRoute { trigger: "tidal", topic: "ocean energy" },
    KeywordRoute { trigger: "wave", topic: "ocean energy" },
    KeywordRoute { trigger: "marine", topic: "ocean energy" },
    KeywordRoute { trigger: "hydrogen", topic: "green hydrogen" },
    KeywordRoute { trigger: "fuel cell", topic: "green hydrogen" },
    KeywordRoute { trigger: "footprint", topic: "carbon footprint" },
    KeywordRoute { trigger: "ccs", topic: "carbon capture" },
    KeywordRoute { trigger: "capture", topic: "carbon capture" },
    KeywordRoute { trigger: "sequestration", topic: "carbon capture" },
    KeywordRoute { trigger: "carbon", topic: "carbon footprint" },
    KeywordRoute { trigger: "climate", topic: "climate change" },
    KeywordRoute { trigger: "warming", topic: "climate change" },
    KeywordRoute { trigger: "greenhouse", topic: "greenhouse effect" },
    KeywordRoute { trigger: "methane", topic: "greenhouse effect" },
    KeywordRoute { trigger: "microgrid", topic: "microgrids" },
    KeywordRoute { trigger: "grid", topic: "microgrids" },
    KeywordRoute { trigger: "agriculture", topic: "sustainable agriculture" },
    KeywordRoute { trigger: "farming", topic: "sustainable agriculture" },
    KeywordRoute { trigger: "food", topic: "sustainable agriculture" },
    KeywordRoute { trigger: "circular", topic: "circular economy" },
    KeywordRoute { trigger: "recycl", topic: "circular economy" },
    KeywordRoute { trigger: "city", topic: "smart cities" },
    KeywordRoute { trigger: "cities", topic: "smart cities" },
    KeywordRoute { trigger: "urban", topic: "smart cities" },
    KeywordRoute { trigger: "sustainable", topic: "sustainable living" },
    KeywordRoute { trigger: "lifestyle", topic: "sustainable living" },
    KeywordRoute { trigger: "water", topic: "water conservation" },
    KeywordRoute { trigger: "drought", topic: "water conservation" },
    KeywordRoute { trigger: "species", topic: "biodiversity" },
    KeywordRoute { trigger: "wildlife", topic: "biodiversity" },
    KeywordRoute { trigger: "ecosystem", topic: "biodiversity" },
    KeywordRoute { trigger: "plastic", topic: "plastic pollution" },
    KeywordRoute { trigger: "forest", topic: "deforestation" },
    KeywordRoute { trigger: "tree", topic: "deforestation" },
    KeywordRoute { trigger: "net-zero", topic: "net zero" },
    KeywordRoute { trigger: "waste", topic: "zero waste" },
    KeywordRoute { trigger: "electric", topic: "electric vehicles" },
    KeywordRoute { trigger: "car", topic: "electric vehicles" },
    KeywordRoute { trigger: "ev", topic: "electric vehicles" },
];

pub const SAMPLE_QUESTIONS: &[&str] = &[
    "What is renewable energy?",
    "How can I reduce my carbon footprint?",
    "What are the benefits of solar energy?",
    "How does climate change affect the environment?",
    "What are sustainable living practices?",
    "Explain wind energy and its advantages",
    "What is carbon capture technology?",
    "How do electric vehicles help the environment?",
    "What are microgrids and smart energy systems?",
    "Tell me about sustainable agriculture",
];
