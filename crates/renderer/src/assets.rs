//! Static presentation assets embedded in the served document.
//!
//! These are opaque to the server: the stylesheet and the client player
//! script implement no server logic, only DOM behavior (play/pause class
//! toggling, an interval-driven progress simulation, and a canvas
//! visualizer).

pub const STYLES: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        :root {
            --color-brand-primary: #FF2763;
            --color-brand-primary-hover: #E02057;
            --color-bg-page: #0B0F1C;
            --color-bg-sidebar: #0E121F;
            --color-bg-card: #10141E;
            --color-bg-gradient-start: #652E5E;
            --color-bg-gradient-end: #301E35;
            --color-text-primary: #FFFFFF;
            --color-text-secondary: #C5C5D2;
            --color-text-tertiary: #8E8E9A;
            --color-border-subtle: rgba(255,255,255,0.04);
            --font-family: 'Inter', 'Roboto', 'Segoe UI', sans-serif;
            --spacing-xs: 8px;
            --spacing-sm: 12px;
            --spacing-md: 16px;
            --spacing-lg: 24px;
        }

        body {
            font-family: var(--font-family);
            background: var(--color-bg-page);
            color: var(--color-text-primary);
        }

        .app-layout {
            display: grid;
            grid-template-columns: 240px 1fr;
            grid-template-rows: 1fr 80px;
            height: 100vh;
        }

        .sidebar {
            grid-row: 1 / 2;
            background: var(--color-bg-sidebar);
            padding: var(--spacing-lg);
            overflow-y: auto;
        }

        .logo {
            font-size: 1.4rem;
            font-weight: 700;
            margin-bottom: var(--spacing-lg);
        }

        .nav-section {
            margin-bottom: var(--spacing-lg);
        }

        .nav-title {
            font-size: 0.75rem;
            text-transform: uppercase;
            letter-spacing: 0.08em;
            color: var(--color-text-tertiary);
            margin-bottom: var(--spacing-xs);
        }

        .nav-item, .playlist-item {
            display: block;
            padding: var(--spacing-xs) 0;
            color: var(--color-text-secondary);
            text-decoration: none;
        }

        .nav-item.active, .playlist-item.active {
            color: var(--color-text-primary);
        }

        .main-content {
            grid-row: 1 / 2;
            overflow-y: auto;
            padding: var(--spacing-lg);
        }

        .main-header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: var(--spacing-lg);
        }

        .search-bar {
            width: 320px;
            padding: var(--spacing-xs) var(--spacing-md);
            border: 1px solid var(--color-border-subtle);
            border-radius: 20px;
            background: var(--color-bg-card);
            color: var(--color-text-primary);
        }

        .search-bar:focus {
            outline: 1px solid var(--color-brand-primary);
        }

        .hero-section {
            background: linear-gradient(135deg,
                var(--color-bg-gradient-start),
                var(--color-bg-gradient-end));
            border-radius: 12px;
            padding: var(--spacing-lg);
            margin-bottom: var(--spacing-lg);
        }

        .hero-section h1 {
            font-size: 2.4rem;
            margin-bottom: var(--spacing-xs);
        }

        .hero-stats {
            display: flex;
            gap: var(--spacing-lg);
            margin: var(--spacing-md) 0;
            color: var(--color-text-secondary);
        }

        .btn {
            border: none;
            border-radius: 20px;
            padding: var(--spacing-xs) var(--spacing-lg);
            cursor: pointer;
            font-weight: 600;
        }

        .btn-primary {
            background: var(--color-brand-primary);
            color: var(--color-text-primary);
        }

        .btn-primary:hover {
            background: var(--color-brand-primary-hover);
        }

        .section-title {
            font-size: 1.2rem;
            margin-bottom: var(--spacing-md);
        }

        .song-item {
            display: grid;
            grid-template-columns: 2rem 1fr 4rem;
            gap: var(--spacing-md);
            align-items: center;
            padding: var(--spacing-sm);
            border-radius: 8px;
            cursor: pointer;
        }

        .song-item:hover {
            background: var(--color-bg-card);
        }

        .song-item.active .song-title {
            color: var(--color-brand-primary);
        }

        .song-number {
            color: var(--color-text-tertiary);
        }

        .song-artist {
            color: var(--color-text-secondary);
            font-size: 0.85rem;
        }

        .song-duration {
            color: var(--color-text-tertiary);
            text-align: right;
        }

        .bottom-player {
            grid-column: 1 / -1;
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: var(--spacing-lg);
            background: var(--color-bg-sidebar);
            border-top: 1px solid var(--color-border-subtle);
            padding: 0 var(--spacing-lg);
            position: relative;
        }

        .progress-container {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            height: 3px;
            background: var(--color-border-subtle);
        }

        .progress-bar {
            height: 100%;
            width: 0%;
            background: var(--color-brand-primary);
        }

        .player-track {
            display: flex;
            align-items: center;
            gap: var(--spacing-sm);
        }

        .player-thumbnail {
            width: 40px;
            height: 40px;
            border-radius: 4px;
            object-fit: cover;
        }

        .track-artist {
            color: var(--color-text-secondary);
            font-size: 0.85rem;
        }

        .control-btn {
            background: none;
            border: none;
            color: var(--color-text-secondary);
            font-size: 1rem;
            cursor: pointer;
            padding: var(--spacing-xs);
        }

        .control-btn:hover {
            color: var(--color-text-primary);
        }

        .play-pause {
            font-size: 1.4rem;
            color: var(--color-text-primary);
        }

        #visualizer {
            position: fixed;
            bottom: 80px;
            left: 0;
            width: 100%;
            height: 60px;
            pointer-events: none;
            opacity: 0.4;
        }

        ::-webkit-scrollbar {
            width: 8px;
        }

        ::-webkit-scrollbar-thumb {
            background: rgba(255,255,255,0.1);
            border-radius: 4px;
        }

        @keyframes pulse {
            0%, 100% { opacity: 1; }
            50% { opacity: 0.5; }
        }

        .fade-in {
            animation: pulse 0.6s ease-in;
        }
"#;

pub const PLAYER_SCRIPT: &str = r#"
        let currentTrack = 0;
        let isPlaying = false;
        let progressInterval = null;

        const playBtn = document.getElementById('playBtn');
        const playPauseBtn = document.getElementById('playPauseBtn');
        const songItems = document.querySelectorAll('.song-item');
        const progressBar = document.querySelector('.progress-bar');
        const playerThumbnail = document.querySelector('.player-thumbnail');
        const trackTitle = document.querySelector('.track-title');
        const trackArtist = document.querySelector('.track-artist');
        const audio = document.getElementById('audio');

        function updatePlayer(trackIndex) {
            const track = tracks[trackIndex];
            if (!track) return;
            playerThumbnail.src = track.cover;
            playerThumbnail.alt = 'Now Playing: ' + track.title;
            trackTitle.textContent = track.title;
            trackArtist.textContent = track.artist;
            audio.src = track.url;
            songItems.forEach((item, index) => {
                item.classList.toggle('active', index === trackIndex);
            });
            progressBar.style.width = '0%';
        }

        function togglePlayPause() {
            isPlaying = !isPlaying;
            playPauseBtn.textContent = isPlaying ? '❚❚' : '▶';
            playBtn.textContent = isPlaying ? '❚❚ Pause' : '▶ Play All';
            if (isPlaying) {
                audio.play();
                startProgress();
            } else {
                audio.pause();
                stopProgress();
            }
        }

        function startProgress() {
            stopProgress();
            progressInterval = setInterval(updateProgress, 200);
        }

        function stopProgress() {
            if (progressInterval) {
                clearInterval(progressInterval);
                progressInterval = null;
            }
        }

        function updateProgress() {
            if (!isPlaying) return;
            let currentWidth = parseFloat(progressBar.style.width) || 0;
            if (currentWidth >= 100) {
                nextTrack();
            } else {
                progressBar.style.width = (currentWidth + 0.5) + '%';
            }
        }

        function nextTrack() {
            currentTrack = (currentTrack + 1) % tracks.length;
            updatePlayer(currentTrack);
            if (isPlaying) startProgress();
        }

        function previousTrack() {
            currentTrack = (currentTrack - 1 + tracks.length) % tracks.length;
            updatePlayer(currentTrack);
            if (isPlaying) startProgress();
        }

        playBtn.addEventListener('click', togglePlayPause);
        playPauseBtn.addEventListener('click', togglePlayPause);
        document.getElementById('nextBtn').addEventListener('click', nextTrack);
        document.getElementById('prevBtn').addEventListener('click', previousTrack);

        songItems.forEach((item, index) => {
            item.addEventListener('click', () => {
                currentTrack = index;
                updatePlayer(index);
                if (!isPlaying) togglePlayPause();
            });
        });

        const searchBar = document.querySelector('.search-bar');
        searchBar.addEventListener('input', (e) => {
            const query = e.target.value.toLowerCase();
            songItems.forEach((item, index) => {
                const track = tracks[index];
                const haystack = (track.title + ' ' + track.artist).toLowerCase();
                item.style.display = haystack.includes(query) ? '' : 'none';
            });
        });

        document.addEventListener('keydown', (e) => {
            if (e.code === 'Space' && e.target === document.body) {
                e.preventDefault();
                togglePlayPause();
            }
        });

        const canvas = document.getElementById('visualizer');
        const ctx = canvas.getContext('2d');

        function renderFrame() {
            requestAnimationFrame(renderFrame);
            canvas.width = window.innerWidth;
            ctx.clearRect(0, 0, canvas.width, canvas.height);
            if (!isPlaying) return;
            const bars = 100;
            for (let i = 0; i < bars; i++) {
                const barX = i * (canvas.width / bars);
                const barHeight = Math.random() * canvas.height;
                ctx.fillStyle = 'rgba(255, 39, 99, 0.6)';
                ctx.fillRect(barX, canvas.height - barHeight, 2, barHeight);
            }
        }

        document.addEventListener('DOMContentLoaded', () => {
            updatePlayer(0);
            renderFrame();
        });
"#;
